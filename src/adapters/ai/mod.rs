//! AI adapter module. Implements CompletionPort for LLM integration.
//!
//! Provides OpenAI-compatible adapter and mock adapter for offline use and testing.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::MockCompletionAdapter;
pub use openai_adapter::OpenAiAdapter;
