// src/engine/analyzer.rs
use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::models::{
    FeedbackItem, FeedbackKind, PasswordDetails, StrengthCategory, StrengthReport,
};

// Entropy pool sizes per detected class; special uses the conventional
// printable-ASCII symbol count rather than the generator's alphabet size
const POOL_LOWERCASE: usize = 26;
const POOL_UPPERCASE: usize = 26;
const POOL_DIGITS: usize = 10;
const POOL_SPECIAL: usize = 33;

lazy_static! {
    static ref COMMON_PASSWORDS: HashSet<&'static str> = [
        "password", "123456", "qwerty", "admin", "welcome",
        "login", "abc123", "admin123", "letmein", "123456789",
        "password1", "12345678", "football", "iloveyou", "monkey",
        "654321", "sunshine", "master", "666666", "1234567890",
    ]
    .into_iter()
    .collect();
}

static KEYBOARD_PATTERNS: [&str; 8] = [
    "qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx",
    "qwertyuiop", "asdfghjkl", "zxcvbnm",
];

static COMMON_SEQUENCES: [&str; 12] = [
    "123", "321", "abc", "cba", "xyz", "zyx",
    "qwe", "ewq", "asd", "dsa", "zxc", "cxz",
];

/// Score a password and explain the result.
///
/// Total over any input, including non-ASCII; repeated calls on the same
/// string produce identical reports.
pub fn check_strength(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            strength: StrengthCategory::VeryWeak,
            feedback: vec![FeedbackItem::new(FeedbackKind::Bad, "Password is empty")],
            details: PasswordDetails {
                length: 0,
                has_uppercase: false,
                has_lowercase: false,
                has_digits: false,
                has_special: false,
                entropy_bits: 0.0,
            },
        };
    }

    let length = password.chars().count();
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    // Anything outside alphanumeric ASCII counts as special
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let entropy_bits = estimate_entropy(length, has_lowercase, has_uppercase, has_digits, has_special);

    let mut feedback = Vec::new();
    let mut score: i32 = 0;

    // Length
    if length < 8 {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Bad,
            "Password is too short (minimum 8 characters recommended)",
        ));
    } else if length >= 12 {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Good,
            "Good password length (12+ characters)",
        ));
        score += 25;
    } else {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Warning,
            "Acceptable password length (8-11 characters)",
        ));
        score += 15;
    }

    // Character variety
    let mut variety_score = 0;
    if has_uppercase {
        variety_score += 10;
    }
    if has_lowercase {
        variety_score += 10;
    }
    if has_digits {
        variety_score += 10;
    }
    if has_special {
        variety_score += 15;
    }

    if variety_score >= 35 {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Good,
            "Excellent character variety",
        ));
    } else if variety_score >= 20 {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Warning,
            "Moderate character variety - consider adding more types",
        ));
    } else {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Bad,
            "Poor character variety - use a mix of uppercase, lowercase, numbers, and symbols",
        ));
    }
    score += variety_score;

    let lowered = password.to_lowercase();

    if COMMON_PASSWORDS.contains(lowered.as_str()) {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Bad,
            "This is a commonly used password and can be easily guessed",
        ));
        score = (score - 40).max(0);
    }

    if KEYBOARD_PATTERNS.iter().any(|p| lowered.contains(p)) {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Bad,
            "Contains keyboard pattern which weakens security",
        ));
        score = (score - 20).max(0);
    }

    if COMMON_SEQUENCES.iter().any(|s| lowered.contains(s)) {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Warning,
            "Contains predictable sequence of characters",
        ));
        score = (score - 15).max(0);
    }

    if has_repeated_run(password) {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Warning,
            "Contains repeated character sequences",
        ));
        score = (score - 10).max(0);
    }

    // Entropy
    if entropy_bits > 60.0 {
        score += 20;
        feedback.push(FeedbackItem::new(
            FeedbackKind::Good,
            "High entropy - password has excellent randomness",
        ));
    } else if entropy_bits > 40.0 {
        score += 10;
        feedback.push(FeedbackItem::new(
            FeedbackKind::Good,
            "Good entropy - password has good randomness",
        ));
    } else {
        feedback.push(FeedbackItem::new(
            FeedbackKind::Warning,
            "Low entropy - password is not random enough",
        ));
    }

    let score = score.clamp(0, 100) as u8;
    let strength = StrengthCategory::from_score(score);

    let details = PasswordDetails {
        length,
        has_uppercase,
        has_lowercase,
        has_digits,
        has_special,
        entropy_bits,
    };

    if score < 80 {
        feedback.push(FeedbackItem::new(FeedbackKind::Info, recommendation(&details)));
    }

    StrengthReport {
        score,
        strength,
        feedback,
        details,
    }
}

// length * log2(pool), pool being the sum of the detected class sizes
fn estimate_entropy(
    length: usize,
    has_lowercase: bool,
    has_uppercase: bool,
    has_digits: bool,
    has_special: bool,
) -> f64 {
    let mut pool = 0;
    if has_lowercase {
        pool += POOL_LOWERCASE;
    }
    if has_uppercase {
        pool += POOL_UPPERCASE;
    }
    if has_digits {
        pool += POOL_DIGITS;
    }
    if has_special {
        pool += POOL_SPECIAL;
    }

    length as f64 * (pool.max(1) as f64).log2()
}

// Three or more identical consecutive characters
fn has_repeated_run(password: &str) -> bool {
    let mut run = 1;
    let mut prev: Option<char> = None;

    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }

    false
}

fn recommendation(details: &PasswordDetails) -> String {
    let mut improvements = Vec::new();

    if details.length < 12 {
        improvements.push("increasing length to at least 12 characters");
    }
    if !details.has_uppercase {
        improvements.push("adding uppercase letters");
    }
    if !details.has_lowercase {
        improvements.push("adding lowercase letters");
    }
    if !details.has_digits {
        improvements.push("adding numbers");
    }
    if !details.has_special {
        improvements.push("adding special characters");
    }

    if improvements.is_empty() {
        return "Try adding more random characters to further strengthen your password".to_string();
    }

    format!("Consider improving your password by: {}", improvements.join(", "))
}
