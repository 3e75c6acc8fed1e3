use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Validation failures surfaced by the schema-layer helpers.
/// Query construction itself never fails; malformed conditions are
/// dropped, not reported.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("page must be >= 1")]
    InvalidPage,

    #[error("size must be >= 1")]
    InvalidSize,

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("cannot parse '{input}' with format '{format}'")]
    InvalidDate { input: String, format: String },
}
