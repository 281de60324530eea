//! Hierarchical category classification

pub mod defaults;
pub mod mapper;
pub mod ports;
