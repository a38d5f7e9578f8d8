//! Per-document screening pipeline: extract attributes, then rank jobs

use crate::config::Config;
use crate::error::Result;
use crate::jobs::JobPosting;
use crate::output::report::ScreeningReport;
use crate::processing::extractor::Extractor;
use crate::processing::matcher::match_jobs;
use crate::processing::skills::SkillIndex;
use log::debug;

/// Runs the full extract-then-match pipeline for one resume at a time.
/// Holds no per-document state, so one engine can screen any number of
/// documents, concurrently if the caller wants to.
pub struct ScreeningEngine {
    extractor: Extractor,
    jobs: Vec<JobPosting>,
    min_match_score: u32,
    fuzzy_threshold: f64,
}

impl ScreeningEngine {
    /// The skill vocabulary is the built-in reference set extended with the
    /// configured extras and with every required skill of the supplied
    /// postings, so a skill a job asks for is recognizable in resume text
    /// even when it is not in the reference set.
    pub fn new(config: &Config, jobs: Vec<JobPosting>) -> Result<Self> {
        let mut skill_index = SkillIndex::for_jobs(&config.extraction.extra_skills, &jobs)?;
        skill_index.set_fuzzy_threshold(config.extraction.fuzzy_threshold);

        Ok(Self {
            extractor: Extractor::with_skill_index(skill_index),
            jobs,
            min_match_score: config.matching.min_match_score,
            fuzzy_threshold: config.extraction.fuzzy_threshold,
        })
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Screen one decoded document. Total: any text, including empty or
    /// garbled, yields a complete report.
    pub fn screen(&self, text: &str, source_file: &str) -> ScreeningReport {
        let attributes = self.extractor.extract(text);
        debug!(
            "Extracted {} skills for '{}' from {}",
            attributes.skills.len(),
            attributes.name,
            source_file
        );

        let mut matches = match_jobs(&attributes.skills, &self.jobs);
        if self.min_match_score > 0 {
            matches.retain(|m| m.match_score >= self.min_match_score);
        }

        let near_misses = self.extractor.skill_index().near_misses(text);

        ScreeningReport::new(source_file.to_string(), attributes, matches, near_misses)
    }
}
