//! Cross-cutting configuration and constants.

pub mod config;
