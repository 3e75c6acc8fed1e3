use crate::error::SchemaError;
use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, PrimitiveDateTime, format_description};

///
/// Timestamp
/// (unix epoch, in milliseconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        Self(u64::try_from(millis).unwrap_or_default())
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Parse a date or datetime string against a runtime format
    /// description, e.g. `"[year]-[month]-[day]"`.
    ///
    /// Date-only formats resolve to midnight UTC.
    pub fn parse(input: &str, format: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::InvalidDate {
            input: input.to_string(),
            format: format.to_string(),
        };

        let items = format_description::parse(format).map_err(|_| invalid())?;

        let millis = PrimitiveDateTime::parse(input, &items)
            .map(|dt| dt.assume_utc().unix_timestamp_nanos() / 1_000_000)
            .or_else(|_| {
                Date::parse(input, &items)
                    .map(|d| d.midnight().assume_utc().unix_timestamp_nanos() / 1_000_000)
            })
            .map_err(|_| invalid())?;

        u64::try_from(millis).map(Self).map_err(|_| invalid())
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

///
/// TESTS
///
