//! Per-field pattern extraction from resume text
//!
//! Each field has its own extractor returning an `Option`; a pattern that
//! finds nothing falls back to the documented literal instead of failing.
//! `extract` is total over any input string, including the empty string.

use crate::error::Result;
use crate::processing::candidate::{
    CandidateAttributes, EDUCATION_FALLBACK, LOCATION_FALLBACK, PHONE_FALLBACK,
};
use crate::processing::skills::SkillIndex;
use regex::Regex;

/// Known city spellings checked before the generic "City, ST" shape.
const KNOWN_LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Boston, MA",
    "Seattle, WA",
    "Austin, TX",
    "Chicago, IL",
    "Denver, CO",
    "Los Angeles, CA",
    "Remote",
];

pub struct Extractor {
    skill_index: SkillIndex,
    name_line: Regex,
    name_label: Regex,
    email: Regex,
    phone: Regex,
    city_state: Regex,
    experience: Regex,
    education: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self::with_skill_index(SkillIndex::new()?))
    }

    pub fn with_skill_index(skill_index: SkillIndex) -> Self {
        let name_line =
            Regex::new(r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)\b").expect("Invalid name regex");
        let name_label =
            Regex::new(r"(?im)name\s*:\s*([^\n]+)").expect("Invalid name label regex");
        let email = Regex::new(r"[A-Za-z0-9._-]+@[A-Za-z0-9._-]+\.[A-Za-z]{2,}")
            .expect("Invalid email regex");
        let phone = Regex::new(r"(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
            .expect("Invalid phone regex");
        let city_state = Regex::new(r"\b([A-Z][a-z]+(?: [A-Z][a-z]+)*, [A-Z]{2})\b")
            .expect("Invalid location regex");
        let experience = Regex::new(r"(?i)(\d+)\s*\+?\s*years?\s*(?:of\s+)?experience")
            .expect("Invalid experience regex");
        let education = Regex::new(
            r"(?i)\b(?:BS|BA|MS|MA|PhD|Bachelor|Master|Doctorate)\b[^\n]*?\b(?:University|Institute|College)\b",
        )
        .expect("Invalid education regex");

        Self {
            skill_index,
            name_line,
            name_label,
            email,
            phone,
            city_state,
            experience,
            education,
        }
    }

    pub fn skill_index(&self) -> &SkillIndex {
        &self.skill_index
    }

    /// Turn raw resume text into a complete attribute record. Never fails:
    /// anything that cannot be found takes its fallback value.
    pub fn extract(&self, text: &str) -> CandidateAttributes {
        let name = self
            .extract_name(text)
            .unwrap_or_else(CandidateAttributes::placeholder_name);
        let email = self
            .extract_email(text)
            .unwrap_or_else(|| CandidateAttributes::synthesize_email(&name));

        CandidateAttributes {
            phone: self
                .extract_phone(text)
                .unwrap_or_else(|| PHONE_FALLBACK.to_string()),
            location: self
                .extract_location(text)
                .unwrap_or_else(|| LOCATION_FALLBACK.to_string()),
            experience_years: self.extract_experience_years(text).unwrap_or(0),
            education: self
                .extract_education(text)
                .unwrap_or_else(|| EDUCATION_FALLBACK.to_string()),
            skills: self.skill_index.extract(text),
            name,
            email,
        }
    }

    /// First line-start pair of capitalized words, else a "name:" label value.
    fn extract_name(&self, text: &str) -> Option<String> {
        if let Some(caps) = self.name_line.captures(text) {
            return Some(caps[1].to_string());
        }
        self.name_label
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| !name.is_empty())
    }

    fn extract_email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone.find(text).map(|m| m.as_str().to_string())
    }

    /// Earliest allow-list hit wins; the generic "City, ST" shape is the
    /// backstop for cities not on the list.
    fn extract_location(&self, text: &str) -> Option<String> {
        let haystack = text.to_lowercase();
        let known = KNOWN_LOCATIONS
            .iter()
            .filter_map(|loc| haystack.find(&loc.to_lowercase()).map(|pos| (pos, *loc)))
            .min_by_key(|(pos, _)| *pos);

        if let Some((_, canonical)) = known {
            return Some(canonical.to_string());
        }
        self.city_state.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_experience_years(&self, text: &str) -> Option<u32> {
        self.experience
            .captures(text)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Full degree-through-institution span, verbatim.
    fn extract_education(&self, text: &str) -> Option<String> {
        self.education.find(text).map(|m| m.as_str().to_string())
    }
}
