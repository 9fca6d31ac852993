//! Service-wide constants.

/// Currency unit reported with every estimate.
pub const CURRENCY: &str = "INR Lakhs";

/// OpenAPI tag for system endpoints (health, metadata).
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for estimation endpoints.
pub const ESTIMATION_TAG: &str = "Estimation";

/// Number of reserved numeric columns at the head of the schema
/// (`total_sqft`, `bath`, `bhk`); everything after is a location indicator.
pub const RESERVED_COLUMNS: usize = 3;
