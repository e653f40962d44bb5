//! Validation helpers that normalize API field values into typed values.
//!
//! The API is loose about how it renders dates, datetimes and amounts. These
//! helpers accept every shape the API produces and reject everything else
//! with a [`ValidationError`], before any network call is made.
//!
//! Resource structs use the [`serde`](self::serde) adapters so that parsing a
//! response runs the same checks.
//!
//! # Example
//!
//! ```rust
//! use starkbank::rest::check;
//! use serde_json::json;
//!
//! let date = check::date("after", "2020-03-10").unwrap();
//! assert_eq!(check::format_date(date), "2020-03-10");
//!
//! let created = check::datetime("created", "2020-03-10 10:30:00.000").unwrap();
//! assert_eq!(check::format_datetime(created), "2020-03-10T10:30:00+00:00");
//!
//! assert_eq!(check::amount("amount", &json!("1500")).unwrap(), 1500);
//! assert!(check::datetime("created", "not-a-date").is_err());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A field value that could not be normalized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: expected {expected}, got {value:?}")]
pub struct ValidationError {
    /// The field being validated.
    pub field: String,
    /// Description of the accepted shapes.
    pub expected: &'static str,
    /// The rejected value, as received.
    pub value: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, expected: &'static str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            expected,
            value: value.into(),
        }
    }
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and any datetime accepted by [`datetime`], in which
/// case the date part as written is kept.
///
/// # Errors
///
/// Returns [`ValidationError`] for malformed strings and impossible dates
/// such as `2020-02-30`.
pub fn date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| ValidationError::new(field, "a date (YYYY-MM-DD)", value))
}

/// Parses an instant, normalized to UTC.
///
/// Accepts RFC 3339 timestamps, ISO-8601 timestamps without an offset
/// (either `T` or space separated, UTC assumed) and bare dates (midnight UTC).
///
/// # Errors
///
/// Returns [`ValidationError`] when none of the accepted shapes match.
pub fn datetime(field: &str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }
    if let Some(datetime) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Ok(datetime.and_utc());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| ValidationError::new(field, "an ISO-8601 datetime", value))
}

/// Parses an amount in integer cents.
///
/// Accepts JSON integers, floats without a fractional part and integer
/// strings.
///
/// # Errors
///
/// Returns [`ValidationError`] for fractional numbers, non-numeric strings
/// and any other JSON type.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn amount(field: &str, value: &serde_json::Value) -> Result<i64, ValidationError> {
    const EXPECTED: &str = "an integer amount in cents";

    let parsed = match value {
        serde_json::Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < 9.0e15)
                .map(|float| float as i64)
        }),
        serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ValidationError::new(field, EXPECTED, value.to_string()))
}

/// Renders a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders an instant as RFC 3339 with a `+00:00` offset.
#[must_use]
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Serde adapters for use with `#[serde(with = "...")]`.
///
/// Deserialization runs the matching check; serialization emits the
/// canonical form. Errors leave the field name to the caller, which knows
/// the path being decoded.
pub mod serde {
    use super::ValidationError;

    fn invalid<E: ::serde::de::Error>(error: ValidationError) -> E {
        E::custom(format_args!(
            "expected {}, got {:?}",
            error.expected, error.value
        ))
    }

    /// `NaiveDate` as `YYYY-MM-DD`.
    pub mod date {
        use chrono::NaiveDate;
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes a date as `YYYY-MM-DD`.
        pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::super::format_date(*value))
        }

        /// Deserializes any accepted date shape.
        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
            let text = String::deserialize(deserializer)?;
            super::super::date("", &text).map_err(invalid)
        }
    }

    /// `Option<NaiveDate>` as `YYYY-MM-DD` or null.
    pub mod option_date {
        use chrono::NaiveDate;
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an optional date.
        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(date) => serializer.serialize_some(&super::super::format_date(*date)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional date; null and empty strings become `None`.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .filter(|text| !text.is_empty())
                .map(|text| super::super::date("", &text).map_err(invalid))
                .transpose()
        }
    }

    /// `DateTime<Utc>` as RFC 3339.
    pub mod datetime {
        use chrono::{DateTime, Utc};
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an instant as RFC 3339.
        pub fn serialize<S: Serializer>(
            value: &DateTime<Utc>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::super::format_datetime(*value))
        }

        /// Deserializes any accepted datetime shape.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<DateTime<Utc>, D::Error> {
            let text = String::deserialize(deserializer)?;
            super::super::datetime("", &text).map_err(invalid)
        }
    }

    /// `Option<DateTime<Utc>>` as RFC 3339 or null.
    pub mod option_datetime {
        use chrono::{DateTime, Utc};
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an optional instant.
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(datetime) => {
                    serializer.serialize_some(&super::super::format_datetime(*datetime))
                }
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional instant; null and empty strings become `None`.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .filter(|text| !text.is_empty())
                .map(|text| super::super::datetime("", &text).map_err(invalid))
                .transpose()
        }
    }

    /// `i64` cents from integers or integer strings.
    pub mod amount {
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes cents as a JSON integer.
        #[allow(clippy::trivially_copy_pass_by_ref)]
        pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_i64(*value)
        }

        /// Deserializes any accepted amount shape.
        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
            let value = serde_json::Value::deserialize(deserializer)?;
            super::super::amount("", &value).map_err(invalid)
        }
    }

    /// `Option<i64>` cents, null allowed.
    pub mod option_amount {
        use super::invalid;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes optional cents.
        pub fn serialize<S: Serializer>(
            value: &Option<i64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(cents) => serializer.serialize_some(cents),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes optional cents.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<i64>, D::Error> {
            match serde_json::Value::deserialize(deserializer)? {
                serde_json::Value::Null => Ok(None),
                value => super::super::amount("", &value)
                    .map(Some)
                    .map_err(invalid),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_date_accepts_plain_dates() {
        let parsed = date("after", "2020-03-10").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2020, 3, 10));
    }

    #[test]
    fn test_date_truncates_datetimes() {
        assert_eq!(
            date("due", "2020-03-10T23:59:59.999-03:00").unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()
        );
        assert_eq!(
            date("due", "2020-03-10 10:30:00.000").unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_date_rejects_impossible_and_malformed() {
        let error = date("due", "2020-02-30").unwrap_err();
        assert_eq!(error.field, "due");
        assert_eq!(error.value, "2020-02-30");

        assert!(date("due", "10/03/2020").is_err());
        assert!(date("due", "").is_err());
    }

    #[test]
    fn test_datetime_accepts_every_api_shape() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 10)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
            .and_utc();

        assert_eq!(datetime("created", "2020-03-10T10:30:00+00:00").unwrap(), expected);
        assert_eq!(datetime("created", "2020-03-10T10:30:00Z").unwrap(), expected);
        assert_eq!(datetime("created", "2020-03-10T07:30:00-03:00").unwrap(), expected);
        assert_eq!(datetime("created", "2020-03-10 10:30:00.000").unwrap(), expected);
        assert_eq!(datetime("created", "2020-03-10T10:30:00").unwrap(), expected);
    }

    #[test]
    fn test_datetime_keeps_fractional_seconds() {
        let parsed = datetime("created", "2020-03-10T10:30:00.123456+00:00").unwrap();
        assert_eq!(parsed.nanosecond(), 123_456_000);
        assert_eq!(format_datetime(parsed), "2020-03-10T10:30:00.123456+00:00");
    }

    #[test]
    fn test_datetime_bare_date_is_midnight_utc() {
        let parsed = datetime("created", "2020-03-10").unwrap();
        assert_eq!(format_datetime(parsed), "2020-03-10T00:00:00+00:00");
    }

    #[test]
    fn test_datetime_rejects_garbage() {
        let error = datetime("created", "not-a-date").unwrap_err();
        assert_eq!(error.field, "created");
        assert!(error.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_amount_shapes() {
        assert_eq!(amount("amount", &json!(1500)).unwrap(), 1500);
        assert_eq!(amount("amount", &json!("1500")).unwrap(), 1500);
        assert_eq!(amount("amount", &json!(1500.0)).unwrap(), 1500);
        assert_eq!(amount("amount", &json!(-20)).unwrap(), -20);

        assert!(amount("amount", &json!(15.5)).is_err());
        assert!(amount("amount", &json!("15.5")).is_err());
        assert!(amount("amount", &json!("abc")).is_err());
        assert!(amount("amount", &json!(null)).is_err());
        assert!(amount("amount", &json!([1])).is_err());
    }

    #[test]
    fn test_serde_adapters_round_trip_canonical_forms() {
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        struct Sample {
            #[serde(with = "super::serde::date")]
            due: NaiveDate,
            #[serde(with = "super::serde::datetime")]
            created: DateTime<Utc>,
            #[serde(with = "super::serde::option_date", default)]
            scheduled: Option<NaiveDate>,
            #[serde(with = "super::serde::amount")]
            amount: i64,
        }

        let sample: Sample = serde_json::from_value(json!({
            "due": "2020-03-10T00:00:00+00:00",
            "created": "2020-03-10 10:30:00.000",
            "scheduled": null,
            "amount": "200"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({
                "due": "2020-03-10",
                "created": "2020-03-10T10:30:00+00:00",
                "scheduled": null,
                "amount": 200
            })
        );
    }

    #[test]
    fn test_serde_adapter_errors_leave_naming_to_the_field_path() {
        #[derive(Debug, ::serde::Deserialize)]
        struct Sample {
            #[serde(with = "super::serde::option_amount", default)]
            #[allow(dead_code)]
            fee: Option<i64>,
            #[serde(with = "super::serde::datetime")]
            #[allow(dead_code)]
            created: DateTime<Utc>,
        }

        let error = serde_path_to_error::deserialize::<_, Sample>(json!({
            "fee": 0,
            "created": "yesterday"
        }))
        .unwrap_err();
        assert_eq!(error.path().to_string(), "created");
        assert_eq!(
            error.inner().to_string(),
            r#"expected an ISO-8601 datetime, got "yesterday""#
        );

        let error = serde_path_to_error::deserialize::<_, Sample>(json!({
            "fee": "abc",
            "created": "2020-03-10"
        }))
        .unwrap_err();
        assert_eq!(error.path().to_string(), "fee");
        assert!(error
            .inner()
            .to_string()
            .starts_with("expected an integer amount in cents"));
    }
}
