//! # AI Module
//!
//! Boundary to the external completion service. The orchestrator calls the
//! AI first and degrades to the keyword classifier on any failure.
//!
//! ## Components
//! - `traits`: `CompletionClient` seam (HTTP client or test double)
//! - `groq`: OpenAI-compatible chat-completions client
//! - `prompt`: prompt and request construction
//! - `verdict`: validation of the JSON reply
//! - `replies`: reply templates per category
//! - `orchestrator`: AI-first classification with keyword fallback

pub mod groq;
pub mod orchestrator;
pub mod prompt;
pub mod replies;
pub mod traits;
pub mod verdict;

pub use groq::GroqClient;
pub use orchestrator::{ClassificationOrchestrator, FALLBACK_REASON};
pub use traits::{CompletionClient, CompletionRequest};
