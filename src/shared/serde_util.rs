//! Custom serde helpers for provider wire formats.

/// Deserializes a Unix-seconds integer into `DateTime<Utc>`.
///
/// The news feed sends `published_on` as epoch seconds, not ISO 8601.
pub mod timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs)))
    }
}

/// Deserializes a JSON number (or numeric string) into an exact `Decimal`.
///
/// Floats go through their shortest round-trip representation, so `0.5`
/// becomes `0.5` rather than the nearest binary fraction. Values outside the
/// `Decimal` range are rejected.
pub mod decimal_number {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Int(i64),
        Float(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawNumber::deserialize(deserializer)? {
            RawNumber::Int(i) => Ok(Decimal::from(i)),
            RawNumber::Float(f) if f.is_finite() => Decimal::from_str(&f.to_string())
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {}: {}", f, e))),
            RawNumber::Float(f) => Err(serde::de::Error::custom(format!(
                "Non-finite number: {}",
                f
            ))),
            RawNumber::Str(s) => Decimal::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {:?}: {}", s, e))),
        }
    }
}
