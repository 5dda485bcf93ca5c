//! Data models and types used throughout ardi

pub mod board;
pub mod sketch;

// Re-export commonly used types
pub use board::*;
pub use sketch::*;
