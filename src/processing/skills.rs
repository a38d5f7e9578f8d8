//! Skill vocabulary and recognition

use crate::error::{Result, ScreenerError};
use crate::jobs::JobPosting;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

/// A vocabulary token that almost matched: likely a misspelling in the
/// resume. Informational only, never added to the candidate's skill set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearMissSkill {
    pub skill: String,
    pub found_text: String,
    pub similarity: f64,
}

/// Case-insensitive skill scanner over a canonical vocabulary.
///
/// Matches are substring hits anywhere in the text; results carry the
/// vocabulary's canonical casing, not the casing found in the document.
pub struct SkillIndex {
    vocabulary: Vec<String>,
    scanner: AhoCorasick,
    fuzzy_threshold: f64,
}

impl SkillIndex {
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(&[])
    }

    /// Build an index over the reference vocabulary extended with extra
    /// entries (configured additions and/or job-required skills). Extras
    /// keep their own casing; entries already present case-insensitively
    /// are collapsed.
    pub fn with_custom_skills(extra: &[String]) -> Result<Self> {
        let mut vocabulary: Vec<String> = Self::reference_vocabulary();
        for skill in extra {
            let skill = skill.trim();
            if skill.is_empty() {
                continue;
            }
            if !vocabulary.iter().any(|v| v.eq_ignore_ascii_case(skill)) {
                vocabulary.push(skill.to_string());
            }
        }

        let scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary)
            .map_err(|e| {
                ScreenerError::TextProcessing(format!("Failed to build skill scanner: {}", e))
            })?;

        Ok(Self {
            vocabulary,
            scanner,
            fuzzy_threshold: 0.85,
        })
    }

    /// Index covering the reference vocabulary plus every required skill of
    /// the supplied postings.
    pub fn for_jobs(extra: &[String], jobs: &[JobPosting]) -> Result<Self> {
        let mut combined: Vec<String> = extra.to_vec();
        for job in jobs {
            combined.extend(job.required_skills.iter().cloned());
        }
        Self::with_custom_skills(&combined)
    }

    pub fn set_fuzzy_threshold(&mut self, threshold: f64) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Every vocabulary entry whose lower-cased form appears anywhere in the
    /// text, in canonical casing, deduplicated, in vocabulary order.
    /// Overlapping hits all count, so "JavaScript" in the text surfaces both
    /// "Java" and "JavaScript" when both are vocabulary entries.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut hits: BTreeSet<usize> = BTreeSet::new();
        for mat in self.scanner.find_overlapping_iter(text) {
            hits.insert(mat.pattern().as_usize());
        }
        hits.into_iter()
            .map(|idx| self.vocabulary[idx].clone())
            .collect()
    }

    /// Tokens that are close to a vocabulary entry without containing it:
    /// probable misspellings, reported for detailed output only.
    pub fn near_misses(&self, text: &str) -> Vec<NearMissSkill> {
        let mut misses: Vec<NearMissSkill> = Vec::new();

        for word in text.unicode_words() {
            let token = clean_token(word);
            if token.len() < 3 {
                continue;
            }
            let token_lower = token.to_lowercase();

            for skill in &self.vocabulary {
                let skill_lower = skill.to_lowercase();
                // Containment is already an exact hit, not a near miss.
                if token_lower.contains(&skill_lower) || skill_lower.contains(&token_lower) {
                    continue;
                }

                let similarity = jaro_winkler(&token_lower, &skill_lower);
                if similarity >= self.fuzzy_threshold {
                    misses.push(NearMissSkill {
                        skill: skill.clone(),
                        found_text: token.clone(),
                        similarity,
                    });
                }
            }
        }

        // Keep the best similarity per (skill, token) pair.
        misses.sort_by(|a, b| {
            a.skill
                .cmp(&b.skill)
                .then(a.found_text.cmp(&b.found_text))
                .then(b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal))
        });
        misses.dedup_by(|a, b| a.skill == b.skill && a.found_text == b.found_text);
        misses.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        misses
    }

    /// Canonical casings of common technical skill names.
    fn reference_vocabulary() -> Vec<String> {
        [
            // Languages
            "JavaScript",
            "TypeScript",
            "Python",
            "Java",
            "C++",
            "C#",
            "Ruby",
            "PHP",
            "Rust",
            "Swift",
            "Kotlin",
            "Scala",
            "SQL",
            // Web
            "React",
            "Vue",
            "Angular",
            "RxJS",
            "Node.js",
            "Express",
            "Next.js",
            "HTML",
            "CSS",
            "Sass",
            "Tailwind",
            "GraphQL",
            "REST API",
            "UI/UX",
            "Figma",
            // Backend and infrastructure
            "Spring Boot",
            "Microservices",
            "Docker",
            "Kubernetes",
            "Terraform",
            "Jenkins",
            "CI/CD",
            "DevOps",
            "AWS",
            "Azure",
            "GCP",
            "Linux",
            "Git",
            "Nginx",
            // Data stores
            "PostgreSQL",
            "MySQL",
            "MongoDB",
            "Redis",
            "Elasticsearch",
            "Cassandra",
            "SQLite",
            // Data and ML
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "Pandas",
            "NumPy",
            "Spark",
            "Kafka",
            "Airflow",
            // Process
            "Agile",
            "Scrum",
            "Kanban",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

fn clean_token(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#' || *c == '.')
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_casing() {
        let index = SkillIndex::new().unwrap();
        let skills = index.extract("experience with react, NODE.JS and python");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_overlapping_entries_all_match() {
        let index = SkillIndex::new().unwrap();
        let skills = index.extract("Wrote a lot of JavaScript.");
        assert!(skills.contains(&"JavaScript".to_string()));
        // "Java" is contained in "JavaScript", so it matches too.
        assert!(skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_deduplicated_and_deterministic() {
        let index = SkillIndex::new().unwrap();
        let text = "Rust Rust rust RUST and more Rust";
        let first = index.extract(text);
        let second = index.extract(text);
        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|s| *s == "Rust").count(), 1);
    }

    #[test]
    fn test_custom_skills_extend_vocabulary() {
        let index = SkillIndex::with_custom_skills(&["Erlang".to_string()]).unwrap();
        let skills = index.extract("Built telecom systems in Erlang");
        assert!(skills.contains(&"Erlang".to_string()));
    }

    #[test]
    fn test_custom_skills_collapse_case_insensitively() {
        let base = SkillIndex::new().unwrap().vocabulary_size();
        let index = SkillIndex::with_custom_skills(&["react".to_string()]).unwrap();
        assert_eq!(index.vocabulary_size(), base);
    }

    #[test]
    fn test_no_skills_in_empty_text() {
        let index = SkillIndex::new().unwrap();
        assert!(index.extract("").is_empty());
    }

    #[test]
    fn test_near_misses() {
        let index = SkillIndex::new().unwrap();
        let misses = index.near_misses("Skilled in Kubernetis and Postgresq");
        assert!(misses.iter().any(|m| m.skill == "Kubernetes"));
        // Exact containment hits never show up as near misses.
        let misses = index.near_misses("Kubernetes");
        assert!(!misses.iter().any(|m| m.skill == "Kubernetes"));
    }
}
