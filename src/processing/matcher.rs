//! Job match scoring and ranking
//!
//! Skill overlap is symmetric lower-cased containment: "Java" matches both
//! "Java" and "JavaScript" in either direction. Every matching
//! (candidate skill, job skill) pair counts, without deduplicating by skill
//! identity, and the score is not capped at 100. The behavior is inherited
//! from the original scoring and covered by tests below.

use crate::jobs::JobPosting;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub match_score: u32,
    pub matching_skill_count: u32,
    pub required_skill_count: u32,
    pub matched_skill_names: Vec<String>,
}

/// Ranked matches, highest score first; ties keep the input job order.
pub type MatchResult = Vec<JobMatch>;

/// Score a candidate's skill set against every posting. Pure function of its
/// inputs. Jobs with no required skills never appear; matches are emitted
/// only when the score is above zero.
pub fn match_jobs(skills: &[String], jobs: &[JobPosting]) -> MatchResult {
    let candidate_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let mut matches: MatchResult = Vec::new();

    for job in jobs {
        if job.required_skills.is_empty() {
            continue;
        }

        let mut pair_count: u32 = 0;
        let mut matched_names: Vec<String> = Vec::new();

        for candidate_skill in &candidate_lower {
            for job_skill in &job.required_skills {
                let job_lower = job_skill.to_lowercase();
                if candidate_skill.contains(&job_lower) || job_lower.contains(candidate_skill) {
                    pair_count += 1;
                    if !matched_names.contains(job_skill) {
                        matched_names.push(job_skill.clone());
                    }
                }
            }
        }

        let required = job.required_skills.len() as u32;
        let match_score = ((pair_count as f64 / required as f64) * 100.0).round() as u32;

        if match_score > 0 {
            matches.push(JobMatch {
                job_id: job.id,
                job_title: job.title.clone(),
                company: job.company.clone(),
                match_score,
                matching_skill_count: pair_count,
                required_skill_count: required,
                matched_skill_names: matched_names,
            });
        }
    }

    // Vec::sort_by is stable, so equal scores keep job-store order.
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}
