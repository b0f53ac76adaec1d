//! AI Core - Generative inference client
//!
//! Provides an abstraction for single-turn LLM inference and an adapter for
//! the Anthropic Messages API.

pub mod anthropic;
pub mod config;
pub mod error;
pub mod ports;

pub use anthropic::AnthropicInferenceEngine;
pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
