// used for timestamps with varying precision
use chrono::{NaiveDate, NaiveDateTime, Utc};
// used for decimal numbers
use bigdecimal::BigDecimal;
// used for JSON
use jsondata::Json;

// used when parsing a string to a time or number
use std::str::FromStr;
// used to print out readable forms of a value
use std::fmt;
// used to indicate that values need to be hashable
use std::hash::{Hash, Hasher};
// used to overload common operations for values
use std::ops;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{KeywiseError, Result};

/// The closed set of value variants a keyed container may hold.
///
/// The domain is known and closed, so type-guarded lookups dispatch on
/// this tag rather than on runtime reflection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Decimal(Decimal),
    Time(Time),
    Json(JSON),
}

/// Fieldless discriminant of [`Value`], one per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    Decimal,
    Time,
    Json,
}

impl ValueKind {
    pub fn data_type(&self) -> &'static str {
        match self {
            ValueKind::String => String::DATA_TYPE,
            ValueKind::Int => i64::DATA_TYPE,
            ValueKind::Bool => bool::DATA_TYPE,
            ValueKind::Decimal => Decimal::DATA_TYPE,
            ValueKind::Time => Time::DATA_TYPE,
            ValueKind::Json => JSON::DATA_TYPE,
        }
    }
}
impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data_type())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Time(_) => ValueKind::Time,
            Value::Json(_) => ValueKind::Json,
        }
    }
    pub fn data_type(&self) -> &'static str {
        self.kind().data_type()
    }
    /// Parses a literal into a value of the given kind.
    pub fn parse(kind: ValueKind, literal: &str) -> Result<Value> {
        match kind {
            ValueKind::String => Ok(Value::String(literal.to_owned())),
            ValueKind::Int => literal
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| parse_error(e.to_string(), literal)),
            ValueKind::Bool => match literal {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(parse_error("expected true or false", literal)),
            },
            ValueKind::Decimal => Decimal::from_str(literal)
                .map(Value::Decimal)
                .ok_or_else(|| parse_error("not a decimal number", literal)),
            ValueKind::Time => literal.parse::<Time>().map(Value::Time),
            ValueKind::Json => JSON::from_str(literal)
                .map(Value::Json)
                .ok_or_else(|| parse_error("not well formed JSON", literal)),
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Time(v) => write!(f, "{}", v),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

fn parse_error(message: impl Into<String>, input: &str) -> KeywiseError {
    KeywiseError::Parse {
        message: message.into(),
        input: input.to_owned(),
    }
}

/// A payload type that one [`Value`] variant carries.
///
/// Type-guarded lookups are generic over this trait: the tag constants
/// identify the variant and [`ValueType::from_value`] extracts the payload
/// when the tag matches.
pub trait ValueType: fmt::Display + Eq + Hash {
    // static stuff which needs to be implemented downstream
    const KIND: ValueKind;
    const DATA_TYPE: &'static str;
    fn from_value(value: &Value) -> Option<&Self>;
    // instance callable with pre-made implementation
    fn data_type(&self) -> &'static str {
        Self::DATA_TYPE
    }
    fn kind(&self) -> ValueKind {
        Self::KIND
    }
}

// ------------- Payload Types --------------
impl ValueType for String {
    const KIND: ValueKind = ValueKind::String;
    const DATA_TYPE: &'static str = "String";
    fn from_value(value: &Value) -> Option<&String> {
        match value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}
impl ValueType for i64 {
    const KIND: ValueKind = ValueKind::Int;
    const DATA_TYPE: &'static str = "i64";
    fn from_value(value: &Value) -> Option<&i64> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}
impl ValueType for bool {
    const KIND: ValueKind = ValueKind::Bool;
    const DATA_TYPE: &'static str = "bool";
    fn from_value(value: &Value) -> Option<&bool> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}
impl ValueType for Decimal {
    const KIND: ValueKind = ValueKind::Decimal;
    const DATA_TYPE: &'static str = "Decimal";
    fn from_value(value: &Value) -> Option<&Decimal> {
        match value {
            Value::Decimal(v) => Some(v),
            _ => None,
        }
    }
}
impl ValueType for Time {
    const KIND: ValueKind = ValueKind::Time;
    const DATA_TYPE: &'static str = "Time";
    fn from_value(value: &Value) -> Option<&Time> {
        match value {
            Value::Time(v) => Some(v),
            _ => None,
        }
    }
}
impl ValueType for JSON {
    const KIND: ValueKind = ValueKind::Json;
    const DATA_TYPE: &'static str = "JSON";
    fn from_value(value: &Value) -> Option<&JSON> {
        match value {
            Value::Json(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- conversions into Value --------------
impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_owned())
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}
impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}
impl From<Decimal> for Value {
    fn from(v: Decimal) -> Value {
        Value::Decimal(v)
    }
}
impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Value {
        Value::Decimal(Decimal(v))
    }
}
impl From<Time> for Value {
    fn from(v: Time) -> Value {
        Value::Time(v)
    }
}
impl From<JSON> for Value {
    fn from(v: JSON) -> Value {
        Value::Json(v)
    }
}

// Special types below
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone)]
pub struct JSON(Json);

impl JSON {
    pub fn from_str(s: &str) -> Option<JSON> {
        match Json::from_str(s) {
            Ok(json) => Some(JSON(json)),
            _ => None,
        }
    }
}
impl Hash for JSON {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_string().hash(state);
    }
}
impl fmt::Display for JSON {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Debug for JSON {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "JSON({})", self.0)
    }
}
impl ops::Deref for JSON {
    type Target = Json;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
// no DerefMut: all our values are immutable

#[derive(Eq, PartialEq, Hash, PartialOrd, Ord, Clone, Debug)]
pub struct Decimal(BigDecimal);

impl Decimal {
    pub fn from_str(s: &str) -> Option<Decimal> {
        match BigDecimal::from_str(s) {
            Ok(decimal) => Some(Decimal(decimal)),
            _ => None,
        }
    }
}
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl ops::Deref for Decimal {
    type Target = BigDecimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A moment with variant precision: a whole year, a month of a year, a
/// date, or a date with time of day.
#[derive(Eq, PartialEq, PartialOrd, Ord, Debug, Hash, Clone)]
pub enum Time {
    Year(u16),
    YearMonth(u16, u8),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

lazy_static! {
    static ref YEAR_FORM: Regex = Regex::new(r"^(\d{4})$").unwrap();
    static ref YEAR_MONTH_FORM: Regex = Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap();
}

impl Time {
    pub fn now() -> Time {
        Time::DateTime(Utc::now().naive_utc())
    }
}
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Time::Year(y) => {
                write!(f, "{:04}", y)
            }
            Time::YearMonth(y, m) => {
                write!(f, "{:04}-{:02}", y, m)
            }
            Time::Date(d) => {
                write!(f, "{}", d)
            }
            Time::DateTime(d) => {
                write!(f, "{}", d)
            }
        }
    }
}
impl FromStr for Time {
    type Err = KeywiseError;
    fn from_str(s: &str) -> Result<Time> {
        if let Some(captures) = YEAR_FORM.captures(s) {
            let year = captures[1]
                .parse::<u16>()
                .map_err(|e| parse_error(e.to_string(), s))?;
            return Ok(Time::Year(year));
        }
        if let Some(captures) = YEAR_MONTH_FORM.captures(s) {
            let year = captures[1]
                .parse::<u16>()
                .map_err(|e| parse_error(e.to_string(), s))?;
            let month = captures[2]
                .parse::<u8>()
                .map_err(|e| parse_error(e.to_string(), s))?;
            if !(1..=12).contains(&month) {
                return Err(parse_error("month out of range", s));
            }
            return Ok(Time::YearMonth(year, month));
        }
        if let Ok(date) = NaiveDate::from_str(s) {
            return Ok(Time::Date(date));
        }
        if let Ok(datetime) = NaiveDateTime::from_str(s) {
            return Ok(Time::DateTime(datetime));
        }
        Err(parse_error("unrecognized time literal", s))
    }
}
