//! Pure helper functions shared across the engines

pub mod url;
