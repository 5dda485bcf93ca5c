//! Utility functions and helpers used throughout ardi

pub mod logging;
