//! Screening report: one record per processed resume

use crate::processing::candidate::CandidateAttributes;
use crate::processing::matcher::{JobMatch, MatchResult};
use crate::processing::skills::NearMissSkill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub source_file: String,
    pub candidate: CandidateAttributes,
    pub avatar: String,
    pub matches: MatchResult,
    /// Top ranked match, when any job matched at all.
    pub best_match: Option<JobMatch>,
    /// Probable misspelled skills, informational only.
    pub near_miss_skills: Vec<NearMissSkill>,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(
        source_file: String,
        candidate: CandidateAttributes,
        matches: MatchResult,
        near_miss_skills: Vec<NearMissSkill>,
    ) -> Self {
        let avatar = candidate.initials();
        let best_match = matches.first().cloned();
        Self {
            source_file,
            candidate,
            avatar,
            matches,
            best_match,
            near_miss_skills,
            screened_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::{EDUCATION_FALLBACK, LOCATION_FALLBACK, PHONE_FALLBACK};

    fn candidate() -> CandidateAttributes {
        CandidateAttributes {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: PHONE_FALLBACK.to_string(),
            location: LOCATION_FALLBACK.to_string(),
            experience_years: 5,
            education: EDUCATION_FALLBACK.to_string(),
            skills: vec!["React".to_string()],
        }
    }

    #[test]
    fn test_best_match_tracks_first_ranked() {
        let matches = vec![
            JobMatch {
                job_id: 2,
                job_title: "Top".to_string(),
                company: "Acme".to_string(),
                match_score: 100,
                matching_skill_count: 1,
                required_skill_count: 1,
                matched_skill_names: vec!["React".to_string()],
            },
            JobMatch {
                job_id: 1,
                job_title: "Second".to_string(),
                company: "Acme".to_string(),
                match_score: 50,
                matching_skill_count: 1,
                required_skill_count: 2,
                matched_skill_names: vec!["React".to_string()],
            },
        ];

        let report = ScreeningReport::new("cv.pdf".to_string(), candidate(), matches, vec![]);
        assert_eq!(report.best_match.as_ref().unwrap().job_id, 2);
        assert_eq!(report.avatar, "JD");
    }

    #[test]
    fn test_empty_matches_have_no_best() {
        let report = ScreeningReport::new("cv.pdf".to_string(), candidate(), vec![], vec![]);
        assert!(report.best_match.is_none());
    }

    #[test]
    fn test_report_serializes() {
        let report = ScreeningReport::new("cv.pdf".to_string(), candidate(), vec![], vec![]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"source_file\":\"cv.pdf\""));
        assert!(json.contains("John Doe"));
    }
}
