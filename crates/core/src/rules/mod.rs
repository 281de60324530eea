//! Activity rule engine - productivity rating via user-authored rules

pub mod matcher;
pub mod ports;
pub mod service;
