// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_special: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => StrengthCategory::VeryStrong,
            60..=79 => StrengthCategory::Strong,
            40..=59 => StrengthCategory::Moderate,
            20..=39 => StrengthCategory::Weak,
            _ => StrengthCategory::VeryWeak,
        }
    }
}

impl std::fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthCategory::VeryWeak => write!(f, "Very Weak"),
            StrengthCategory::Weak => write!(f, "Weak"),
            StrengthCategory::Moderate => write!(f, "Moderate"),
            StrengthCategory::Strong => write!(f, "Strong"),
            StrengthCategory::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Good,
    Warning,
    Bad,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackItem {
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackItem {
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

// Per-password composition facts backing a strength report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordDetails {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub entropy_bits: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Aggregate score, 0-100
    pub score: u8,
    pub strength: StrengthCategory,
    pub feedback: Vec<FeedbackItem>,
    pub details: PasswordDetails,
}

// Outcome of one k-anonymity range lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreachVerdict {
    pub is_compromised: bool,
    pub occurrence_count: u64,
    /// True when the lookup itself failed; the other fields are then defaults
    pub is_error: bool,
}

// Storable PBKDF2 output for the external persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DerivedHash {
    pub method: String,
    /// Derived key, base64-encoded
    pub key: String,
    /// Random salt, base64-encoded
    pub salt: String,
    pub iterations: u32,
}
