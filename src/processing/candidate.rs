//! Candidate attributes extracted from a resume

use serde::{Deserialize, Serialize};

/// Fallback literal for a phone number that could not be found.
pub const PHONE_FALLBACK: &str = "Not provided";
/// Fallback literal for a location that could not be found.
pub const LOCATION_FALLBACK: &str = "Not specified";
/// Fallback literal for an education line that could not be found.
pub const EDUCATION_FALLBACK: &str = "Not provided";

/// Structured attributes of one candidate. Every field is always populated:
/// a field the extractor could not find carries its documented fallback
/// instead of being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience_years: u32,
    pub education: String,
    /// Deduplicated, in canonical vocabulary casing.
    pub skills: Vec<String>,
}

impl CandidateAttributes {
    /// Placeholder name used when no name pattern matches, derived from the
    /// current timestamp so concurrently parsed unnamed resumes stay distinct.
    pub fn placeholder_name() -> String {
        format!("Candidate {}", chrono::Utc::now().timestamp_millis())
    }

    /// Synthesize an address from a resolved name: lower-cased, spaces to dots.
    pub fn synthesize_email(name: &str) -> String {
        let local = name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");
        format!("{}@email.com", local)
    }

    /// Avatar initials: first letter of each name word, uppercased, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
