use thiserror::Error;

/// Errors raised when parsing textual literals into values.
///
/// The traversal and lookup surface itself never raises: absent keys,
/// tag mismatches and failed predicates are ordinary control flow there.
#[derive(Error, Debug)]
pub enum KeywiseError {
    #[error("Parse error: {message} (input: {input})")]
    Parse { message: String, input: String },
}

pub type Result<T> = std::result::Result<T, KeywiseError>;
