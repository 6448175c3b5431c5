use keywise::value::{Decimal, JSON, Time, Value, ValueKind};

#[test]
fn each_kind_parses_its_literal_form() {
    assert_eq!(Value::parse(ValueKind::Int, "42").unwrap(), Value::Int(42));
    assert_eq!(
        Value::parse(ValueKind::Bool, "true").unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        Value::parse(ValueKind::String, "plain").unwrap(),
        Value::from("plain")
    );
    let decimal = Value::parse(ValueKind::Decimal, "3.14").unwrap();
    assert_eq!(decimal.kind(), ValueKind::Decimal);
    assert_eq!(decimal.to_string(), "3.14");
    let time = Value::parse(ValueKind::Time, "2024-06").unwrap();
    assert_eq!(time.kind(), ValueKind::Time);
    let json = Value::parse(ValueKind::Json, r#"{"a": 1}"#).unwrap();
    assert_eq!(json.kind(), ValueKind::Json);
}

#[test]
fn malformed_literals_are_parse_errors() {
    let err = Value::parse(ValueKind::Int, "forty-two").unwrap_err();
    assert!(format!("{}", err).contains("Parse error"));
    assert!(Value::parse(ValueKind::Bool, "yes").is_err());
    assert!(Value::parse(ValueKind::Decimal, "NaN-ish").is_err());
    assert!(Value::parse(ValueKind::Json, "{").is_err());
}

#[test]
fn time_literals_cover_all_precisions() {
    assert_eq!("2024".parse::<Time>().unwrap(), Time::Year(2024));
    assert_eq!("2024-06".parse::<Time>().unwrap(), Time::YearMonth(2024, 6));
    let date = "2024-06-19".parse::<Time>().unwrap();
    assert!(matches!(date, Time::Date(_)));
    let datetime = "2024-06-19T12:30:00".parse::<Time>().unwrap();
    assert!(matches!(datetime, Time::DateTime(_)));
}

#[test]
fn year_and_year_month_round_trip_through_display() {
    for literal in ["2024", "2024-06", "2024-06-19"] {
        let time = literal.parse::<Time>().unwrap();
        assert_eq!(time.to_string(), literal);
    }
}

#[test]
fn out_of_range_months_are_rejected() {
    assert!("2024-13".parse::<Time>().is_err());
    assert!("2024-00".parse::<Time>().is_err());
}

#[test]
fn unrecognized_time_literals_are_rejected() {
    let err = "next tuesday".parse::<Time>().unwrap_err();
    assert!(format!("{}", err).contains("unrecognized time literal"));
}

#[test]
fn values_report_their_tags() {
    assert_eq!(Value::Int(1).data_type(), "i64");
    assert_eq!(Value::from("s").data_type(), "String");
    assert_eq!(Value::Bool(false).data_type(), "bool");
    assert_eq!(
        Value::from(Decimal::from_str("1.5").unwrap()).data_type(),
        "Decimal"
    );
    assert_eq!(Value::from(Time::Year(2024)).data_type(), "Time");
    assert_eq!(
        Value::from(JSON::from_str("[1, 2]").unwrap()).data_type(),
        "JSON"
    );
}
