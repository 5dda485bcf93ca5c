//! Error types for ardi

pub mod types;

pub use types::*;
