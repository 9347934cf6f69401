// ABOUTME: Environment-driven configuration for the LLM endpoint
// ABOUTME: Resolves base URL, model, and credentials for the coaching provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Intelligence

//! Environment-only configuration for the coaching core
//!
//! The core follows an environment-only configuration approach: every
//! deployment knob is an environment variable with a documented default.
//!
//! | Variable                  | Default                        |
//! |---------------------------|--------------------------------|
//! | `FORMCOACH_LLM_BASE_URL`  | `http://localhost:11434/v1`    |
//! | `FORMCOACH_LLM_MODEL`     | `qwen2.5:14b-instruct`         |
//! | `FORMCOACH_LLM_API_KEY`   | unset (local servers need none)|

use std::env;

/// Environment variable for the LLM base URL
pub const LLM_BASE_URL_ENV: &str = "FORMCOACH_LLM_BASE_URL";

/// Environment variable for the LLM model name
pub const LLM_MODEL_ENV: &str = "FORMCOACH_LLM_MODEL";

/// Environment variable for the LLM API key (optional)
pub const LLM_API_KEY_ENV: &str = "FORMCOACH_LLM_API_KEY";

/// Default base URL (Ollama-style local endpoint)
const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model for local inference
const DEFAULT_MODEL: &str = "qwen2.5:14b-instruct";

/// Resolved endpoint configuration for the coaching LLM
#[derive(Debug, Clone)]
pub struct LlmEndpointConfig {
    /// Base URL of the `OpenAI`-compatible API
    pub base_url: String,
    /// API key, if the endpoint requires one
    pub api_key: Option<String>,
    /// Model to request
    pub model: String,
}

impl LlmEndpointConfig {
    /// Resolve the endpoint configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(LLM_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let model = env::var(LLM_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let api_key = env::var(LLM_API_KEY_ENV).ok().filter(|k| !k.is_empty());

        Self {
            base_url,
            api_key,
            model,
        }
    }
}

impl Default for LlmEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var(LLM_BASE_URL_ENV);
        std::env::remove_var(LLM_MODEL_ENV);
        std::env::remove_var(LLM_API_KEY_ENV);

        let config = LlmEndpointConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(LLM_BASE_URL_ENV, "https://api.example.com/v1");
        std::env::set_var(LLM_MODEL_ENV, "coach-model");
        std::env::set_var(LLM_API_KEY_ENV, "sk-test");

        let config = LlmEndpointConfig::from_env();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.model, "coach-model");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));

        std::env::remove_var(LLM_BASE_URL_ENV);
        std::env::remove_var(LLM_MODEL_ENV);
        std::env::remove_var(LLM_API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_empty_api_key_treated_as_unset() {
        std::env::set_var(LLM_API_KEY_ENV, "");
        let config = LlmEndpointConfig::from_env();
        assert!(config.api_key.is_none());
        std::env::remove_var(LLM_API_KEY_ENV);
    }
}
