// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{BreachVerdict, DerivedHash, StrengthReport};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    /// Desired password length (requests below 8 are raised to 8)
    pub length: Option<usize>,
    /// Include lowercase letters (default true)
    pub use_lowercase: Option<bool>,
    /// Include uppercase letters (default true)
    pub use_uppercase: Option<bool>,
    /// Include digits (default true)
    pub use_digits: Option<bool>,
    /// Include special characters (default true)
    pub use_special: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated password (only present on success)
    pub password: Option<String>,
    /// Strength report for the generated password
    pub report: Option<StrengthReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength report for the analyzed password
    pub report: Option<StrengthReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckRequest {
    /// Password to check; sent in the body so it never lands in access logs
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckResponse {
    /// Whether the lookup completed
    pub success: bool,
    /// The verdict; carries is_error when the lookup failed
    pub verdict: Option<BreachVerdict>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashRequest {
    /// Password to hash
    pub password: String,
    /// Optional iteration override, clamped to the configured floor
    pub iterations: Option<u32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HashResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Derived hash material for the caller's storage layer
    pub hash: Option<DerivedHash>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Seconds since the server started
    pub uptime_secs: u64,
}
