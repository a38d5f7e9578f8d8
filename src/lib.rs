//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod jobs;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ScreenerError};
pub use jobs::JobPosting;
pub use processing::candidate::CandidateAttributes;
pub use processing::matcher::{JobMatch, MatchResult};
