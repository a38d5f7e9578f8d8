//! Extraction and matching core

pub mod candidate;
pub mod extractor;
pub mod matcher;
pub mod screener;
pub mod skills;
