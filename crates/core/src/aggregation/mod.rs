//! Stream consolidation and duration rollups

pub mod merge;
pub mod report;
