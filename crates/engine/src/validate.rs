//! Request Validator: turns an untyped JSON body into a typed
//! [`EstimateRequest`], or rejects it with the first failing rule.
//!
//! Nothing downstream of this module handles unvalidated input. Rules run
//! in a fixed order and short-circuit: presence, type, positivity, range.

use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// Upper bound on plausible living area, in square feet.
pub const MAX_SQFT: f64 = 50_000.0;
/// Upper bound on plausible bedroom/bathroom counts.
pub const MAX_ROOMS: u32 = 20;

/// Field names checked, in validation order.
const REQUIRED_FIELDS: [&str; 4] = ["total_sqft", "location", "bhk", "bath"];

/// A fully validated price-estimate request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRequest {
    pub location: String,
    pub total_sqft: f64,
    pub bhk: u32,
    pub bath: u32,
}

/// Validates a raw JSON request body.
///
/// # Errors
/// The first failing rule, as a [`ValidationError`]:
/// 1. all of `total_sqft`, `location`, `bhk`, `bath` present,
/// 2. `total_sqft` a real number, `location` a string, `bhk`/`bath`
///    integers (numeric strings are accepted, as the original API did),
/// 3. all numeric values strictly positive,
/// 4. `total_sqft ≤ 50000`, `bhk ≤ 20`, `bath ≤ 20`.
pub fn validate(body: &Value) -> Result<EstimateRequest, ValidationError> {
    for field in REQUIRED_FIELDS {
        if body.get(field).is_none() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let total_sqft = as_real(&body["total_sqft"]).ok_or(ValidationError::InvalidType("total_sqft"))?;
    let location = body["location"]
        .as_str()
        .ok_or(ValidationError::InvalidType("location"))?
        .to_owned();
    let bhk = as_integer(&body["bhk"]).ok_or(ValidationError::InvalidType("bhk"))?;
    let bath = as_integer(&body["bath"]).ok_or(ValidationError::InvalidType("bath"))?;

    if total_sqft <= 0.0 {
        return Err(ValidationError::NonPositiveValue("total_sqft"));
    }
    if bhk <= 0 {
        return Err(ValidationError::NonPositiveValue("bhk"));
    }
    if bath <= 0 {
        return Err(ValidationError::NonPositiveValue("bath"));
    }

    if total_sqft > MAX_SQFT {
        return Err(ValidationError::OutOfRange { field: "total_sqft", max: MAX_SQFT });
    }
    if bhk > i64::from(MAX_ROOMS) {
        return Err(ValidationError::OutOfRange { field: "bhk", max: f64::from(MAX_ROOMS) });
    }
    if bath > i64::from(MAX_ROOMS) {
        return Err(ValidationError::OutOfRange { field: "bath", max: f64::from(MAX_ROOMS) });
    }

    // Positivity was checked above, so the narrowing cannot fail.
    let bhk = u32::try_from(bhk).map_err(|_| ValidationError::InvalidType("bhk"))?;
    let bath = u32::try_from(bath).map_err(|_| ValidationError::InvalidType("bath"))?;

    Ok(EstimateRequest { location, total_sqft, bhk, bath })
}

/// Reads a JSON value as a finite real number. Numeric strings are
/// accepted for parity with the original API's `float(...)` coercion.
fn as_real(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Reads a JSON value as an integer. Floats are accepted only when the
/// fractional part is zero (JSON clients routinely send `2.0`).
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            (f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64).then(|| f as i64)
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({ "total_sqft": 1200, "location": "Whitefield", "bhk": 2, "bath": 2 })
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let req = validate(&valid_body()).expect("valid request");
        assert_eq!(req.location, "Whitefield");
        assert_eq!(req.total_sqft, 1200.0);
        assert_eq!(req.bhk, 2);
        assert_eq!(req.bath, 2);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("bath");
        assert_eq!(validate(&body), Err(ValidationError::MissingField("bath")));

        // total_sqft is checked first when several fields are missing.
        assert_eq!(validate(&json!({})), Err(ValidationError::MissingField("total_sqft")));
    }

    #[test]
    fn type_errors_name_the_field() {
        let mut body = valid_body();
        body["total_sqft"] = json!("not a number");
        assert_eq!(validate(&body), Err(ValidationError::InvalidType("total_sqft")));

        let mut body = valid_body();
        body["location"] = json!(42);
        assert_eq!(validate(&body), Err(ValidationError::InvalidType("location")));

        let mut body = valid_body();
        body["bhk"] = json!(2.5);
        assert_eq!(validate(&body), Err(ValidationError::InvalidType("bhk")));
    }

    #[test]
    fn numeric_strings_and_whole_floats_are_coerced() {
        let mut body = valid_body();
        body["total_sqft"] = json!("1200.5");
        body["bhk"] = json!(2.0);
        body["bath"] = json!("3");
        let req = validate(&body).expect("coerced request");
        assert_eq!(req.total_sqft, 1200.5);
        assert_eq!(req.bhk, 2);
        assert_eq!(req.bath, 3);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let mut body = valid_body();
        body["bhk"] = json!(0);
        assert_eq!(validate(&body), Err(ValidationError::NonPositiveValue("bhk")));

        let mut body = valid_body();
        body["total_sqft"] = json!(-10);
        assert_eq!(validate(&body), Err(ValidationError::NonPositiveValue("total_sqft")));
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let mut body = valid_body();
        body["total_sqft"] = json!(50_000);
        assert!(validate(&body).is_ok());

        body["total_sqft"] = json!(50_001);
        assert_eq!(
            validate(&body),
            Err(ValidationError::OutOfRange { field: "total_sqft", max: MAX_SQFT })
        );

        let mut body = valid_body();
        body["bath"] = json!(21);
        assert_eq!(
            validate(&body),
            Err(ValidationError::OutOfRange { field: "bath", max: 20.0 })
        );
    }

    #[test]
    fn empty_location_is_accepted() {
        // Matches no schema column; the encoder degrades to the baseline.
        let mut body = valid_body();
        body["location"] = json!("");
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn error_messages_match_the_api_contract() {
        assert_eq!(
            ValidationError::MissingField("bath").to_string(),
            "Missing required field: bath"
        );
        assert_eq!(
            ValidationError::OutOfRange { field: "total_sqft", max: MAX_SQFT }.to_string(),
            "total_sqft seems unrealistic (max: 50000)"
        );
    }
}
