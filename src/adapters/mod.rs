//! Infrastructure adapters. Implement ports.
//!
//! LLM provider and terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
