use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::LiftType;

/// A single logged lift, as persisted under the lifts key.
///
/// Field names are camelCase on disk so that exports from the browser
/// version of the challenge load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiftRecord {
    pub id: String,
    pub name: String,
    pub lift_type: LiftType,
    /// Pounds. Stored as a JSON number, so only values f64 can hold survive
    /// a round trip exactly; the log form caps input at three decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    pub sets: u32,
    pub reps: u32,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl LiftRecord {
    /// Creates a record stamped with a fresh time-ordered id and the current time.
    pub fn new(
        name: impl Into<String>,
        lift_type: LiftType,
        weight: Decimal,
        sets: u32,
        reps: u32,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            lift_type,
            weight,
            sets,
            reps,
            timestamp: Utc::now(),
        }
    }

    /// Total weight moved by this lift: `weight * sets * reps`.
    ///
    /// Saturates at the decimal range instead of overflowing.
    pub fn volume(&self) -> Decimal {
        self.weight
            .saturating_mul(Decimal::from(self.sets))
            .saturating_mul(Decimal::from(self.reps))
    }

    /// Checks the numeric invariants every stored lift must satisfy.
    pub fn check(&self) -> Result<(), String> {
        if self.weight.is_sign_negative() && !self.weight.is_zero() {
            return Err(format!("weight must be >= 0, got {}", self.weight));
        }
        if self.sets == 0 {
            return Err("sets must be >= 1".to_string());
        }
        if self.reps == 0 {
            return Err("reps must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Writes RFC 3339 strings with millisecond precision; reads either that or
/// epoch milliseconds.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(D::Error::custom),
            Raw::Millis(millis) => Utc
                .timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn sample() -> LiftRecord {
        LiftRecord {
            id: "1".to_string(),
            name: "Ann".to_string(),
            lift_type: LiftType::Squat,
            weight: dec("100"),
            sets: 3,
            reps: 5,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_serializes_with_storage_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["liftType"], "Squat");
        assert_eq!(value["weight"], 100.0);
        assert_eq!(value["sets"], 3);
        assert_eq!(value["timestamp"], "2025-03-01T12:30:00.000Z");
        assert!(value.get("lift_type").is_none());
    }

    #[test]
    fn test_reads_epoch_millis_timestamp() {
        let raw = r#"{"id":"1712345678901","name":"Ben","liftType":"Deadlift",
            "weight":225.5,"sets":1,"reps":3,"timestamp":1712345678901}"#;

        let record: LiftRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.weight, dec("225.5"));
        assert_eq!(record.timestamp.timestamp_millis(), 1_712_345_678_901);
    }

    #[test]
    fn test_rejects_non_numeric_weight() {
        let raw = r#"{"id":"1","name":"Ben","liftType":"Dip",
            "weight":null,"sets":1,"reps":3,"timestamp":"2025-03-01T12:30:00.000Z"}"#;

        assert!(serde_json::from_str::<LiftRecord>(raw).is_err());
    }

    #[test]
    fn test_volume() {
        assert_eq!(sample().volume(), dec("1500"));

        let huge = LiftRecord {
            weight: Decimal::MAX,
            ..sample()
        };
        assert_eq!(huge.volume(), Decimal::MAX);
    }

    #[test]
    fn test_check_invariants() {
        assert!(sample().check().is_ok());
        assert!(LiftRecord { weight: Decimal::ZERO, ..sample() }.check().is_ok());
        assert!(LiftRecord { weight: dec("-1"), ..sample() }.check().is_err());
        assert!(LiftRecord { sets: 0, ..sample() }.check().is_err());
        assert!(LiftRecord { reps: 0, ..sample() }.check().is_err());
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let first = LiftRecord::new("Ann", LiftType::Dip, dec("0"), 1, 1);
        let second = LiftRecord::new("Ann", LiftType::Dip, dec("0"), 1, 1);

        assert_ne!(first.id, second.id);
    }
}
