//! Feature Encoder: maps a validated request onto the dense numeric vector
//! the regression model expects.
//!
//! The layout is fixed by schema convention, not by input order:
//! `x[0] = sqft`, `x[1] = bath`, `x[2] = bhk`, and at most one location
//! indicator set to 1. Getting an index wrong here produces a wrong price
//! with no crash, which is why the whole layout lives in this one function.

use crate::schema::ColumnSchema;

/// Encodes one request into a feature vector of width `schema.size()`.
///
/// A location absent from the schema leaves all indicator positions at
/// zero: the model then predicts for the baseline (unencoded) location.
/// That soft fallback is deliberate and is not an error.
#[must_use]
pub fn encode(location: &str, sqft: f64, bhk: u32, bath: u32, schema: &ColumnSchema) -> Vec<f64> {
    let mut x = vec![0.0; schema.size()];
    x[0] = sqft;
    x[1] = f64::from(bath);
    x[2] = f64::from(bhk);

    if let Some(index) = schema.position(location) {
        x[index] = 1.0;
    }

    x
}
