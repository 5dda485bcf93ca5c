//! Configuration management for ardi

pub mod app_config;

pub use app_config::*;
