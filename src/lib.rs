//! bid-winner: Freelance proposal drafting over an OpenAI-compatible API, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
