use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{LiftRecord, LiftType};

const MAX_WEIGHT: u32 = 10_000;
const MAX_WEIGHT_SCALE: u32 = 3;

/// Request payload submitted by the lift logging form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogLiftRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub lift_type: LiftType,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(range(min = 1, max = 100, message = "Sets must be between 1 and 100"))]
    pub sets: u32,

    #[validate(range(min = 1, max = 1000, message = "Reps must be between 1 and 1000"))]
    pub reps: u32,
}

impl From<LogLiftRequest> for LiftRecord {
    fn from(request: LogLiftRequest) -> Self {
        LiftRecord::new(
            request.name,
            request.lift_type,
            request.weight,
            request.sets,
            request.reps,
        )
    }
}

/// A logged lift as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LiftResponse {
    pub id: String,
    pub name: String,
    pub lift_type: LiftType,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    pub sets: u32,
    pub reps: u32,
    /// `weight * sets * reps`
    #[serde(with = "rust_decimal::serde::float")]
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl From<LiftRecord> for LiftResponse {
    fn from(record: LiftRecord) -> Self {
        Self {
            volume: record.volume(),
            id: record.id,
            name: record.name,
            lift_type: record.lift_type,
            weight: record.weight,
            sets: record.sets,
            reps: record.reps,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentLiftsQuery {
    /// Number of lifts to return, newest first (default 5)
    #[serde(default = "default_recent_limit")]
    pub limit: usize,
}

fn default_recent_limit() -> usize {
    5
}

impl Default for RecentLiftsQuery {
    fn default() -> Self {
        Self {
            limit: default_recent_limit(),
        }
    }
}

impl RecentLiftsQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if weight.is_sign_negative() && !weight.is_zero() {
        let mut error = validator::ValidationError::new("range");
        error.message = Some("Weight must not be negative".into());
        return Err(error);
    }
    if *weight > Decimal::from(MAX_WEIGHT) {
        let mut error = validator::ValidationError::new("range");
        error.message = Some(format!("Weight must be at most {MAX_WEIGHT} lbs").into());
        return Err(error);
    }
    // Weights are stored as JSON numbers; keep them well inside f64 precision.
    if weight.normalize().scale() > MAX_WEIGHT_SCALE {
        let mut error = validator::ValidationError::new("scale");
        error.message = Some(
            format!("Weight must have at most {MAX_WEIGHT_SCALE} decimal places").into(),
        );
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LogLiftRequest {
        serde_json::from_str(
            r#"{"name":"Ann","lift_type":"Bench Press","weight":135.5,"sets":3,"reps":8}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request();
        assert!(req.validate().is_ok());
        assert_eq!(req.weight, "135.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_blank_name_rejected() {
        let req = LogLiftRequest {
            name: "   ".to_string(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let req = LogLiftRequest {
            name: String::new(),
            ..request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        let negative = LogLiftRequest {
            weight: Decimal::from(-5),
            ..request()
        };
        assert!(negative.validate().unwrap_err().field_errors().contains_key("weight"));

        let zero_weight = LogLiftRequest {
            weight: Decimal::ZERO,
            ..request()
        };
        assert!(zero_weight.validate().is_ok());

        let no_sets = LogLiftRequest { sets: 0, ..request() };
        assert!(no_sets.validate().unwrap_err().field_errors().contains_key("sets"));

        let no_reps = LogLiftRequest { reps: 0, ..request() };
        assert!(no_reps.validate().unwrap_err().field_errors().contains_key("reps"));
    }

    #[test]
    fn test_weight_scale_is_capped() {
        let fine = LogLiftRequest {
            weight: "102.125".parse().unwrap(),
            ..request()
        };
        assert!(fine.validate().is_ok());

        let trailing_zeros = LogLiftRequest {
            weight: "102.50000".parse().unwrap(),
            ..request()
        };
        assert!(trailing_zeros.validate().is_ok());

        let too_precise = LogLiftRequest {
            weight: "102.1234".parse().unwrap(),
            ..request()
        };
        let errors = too_precise.validate().unwrap_err();
        assert_eq!(errors.field_errors()["weight"][0].code, "scale");
    }

    #[test]
    fn test_unknown_lift_type_fails_to_parse() {
        let raw = r#"{"name":"Ann","lift_type":"Curl","weight":10,"sets":1,"reps":1}"#;
        assert!(serde_json::from_str::<LogLiftRequest>(raw).is_err());
    }

    #[test]
    fn test_recent_query_bounds() {
        assert!(RecentLiftsQuery::default().validate().is_ok());
        assert!(RecentLiftsQuery { limit: 0 }.validate().is_err());
        assert!(RecentLiftsQuery { limit: 101 }.validate().is_err());
    }

    #[test]
    fn test_response_includes_volume() {
        let record = LiftRecord::from(request());
        let response = LiftResponse::from(record);
        assert_eq!(response.volume, "3252".parse::<Decimal>().unwrap());
    }
}
