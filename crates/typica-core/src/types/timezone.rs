//! IANA timezone helpers backing the schema defaults.

use crate::error::SchemaError;
use chrono_tz::{TZ_VARIANTS, Tz};

/// Timezone applied wherever the caller does not supply one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// Serde default for timezone-carrying schemas.
#[must_use]
pub fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Resolve a timezone name against the IANA database.
pub fn validate(name: &str) -> Result<Tz, SchemaError> {
    name.parse::<Tz>()
        .map_err(|_| SchemaError::UnknownTimezone(name.to_string()))
}

/// Every known timezone name, in database order.
pub fn common_timezones() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(validate(DEFAULT_TIMEZONE).is_ok());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = validate("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownTimezone("Mars/Olympus_Mons".to_string())
        );
    }

    #[test]
    fn listing_contains_default() {
        assert!(common_timezones().any(|name| name == DEFAULT_TIMEZONE));
    }
}
