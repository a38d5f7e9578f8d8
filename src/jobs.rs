//! Job posting model and JSON job store

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Load job postings from a JSON array file.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ScreenerError::JobStore(format!("Failed to read job store '{}': {}", path.display(), e))
    })?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&content)?;
    Ok(jobs)
}

/// Matching runs against active postings only.
pub fn active_jobs(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    jobs.into_iter().filter(|j| j.is_active()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn job(id: i64, status: &str) -> JobPosting {
        JobPosting {
            id,
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            required_skills: vec!["Rust".to_string()],
            location: None,
            experience: None,
            salary: None,
            description: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_active_filter() {
        let jobs = vec![job(1, "active"), job(2, "closed"), job(3, "active")];
        let active = active_jobs(jobs);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|j| j.is_active()));
    }

    #[test]
    fn test_load_jobs_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 7, "title": "Backend Engineer", "company": "Acme", "required_skills": ["Rust", "PostgreSQL"]}}]"#
        )
        .unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].status, "active");
        assert_eq!(jobs[0].required_skills.len(), 2);
        assert!(jobs[0].location.is_none());
    }

    #[test]
    fn test_load_jobs_missing_file() {
        let result = load_jobs(Path::new("does/not/exist.json"));
        assert!(result.is_err());
    }
}
