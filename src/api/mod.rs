//! HTTP clients for the upstream services.
//!
//! - [`GeniusApi`]: song catalog search and lookup (bearer token)
//! - [`OpenAiClient`]: text and image generation

pub mod catalog;
pub mod openai;

pub use catalog::GeniusApi;
pub use openai::OpenAiClient;
