//! Anthropic Messages API inference engine

mod client;

pub use client::AnthropicInferenceEngine;
