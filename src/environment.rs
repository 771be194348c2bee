use anyhow::Result;
use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use ollama_rs::Ollama;
use std::env;
use std::time::Duration;
use tracing::{info, warn};

use crate::llm::GeminiClient;
use crate::{LLMClient, LLMParams};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GEMINI_ALTERNATES: &[&str] =
    &["gemini-2.5-pro", "gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3:8b";

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Vec<String>`, with empty entries removed.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Vec<String> {
    env::var(var)
        .unwrap_or_default()
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// First variable in `vars` that is set to a non-blank value.
pub fn first_env_var(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Parses a variable, falling back to `default` when unset or malformed.
pub fn env_var_or<T: std::str::FromStr>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Which backend answers prompts, and how to reach it.
#[derive(Clone, Debug, PartialEq)]
pub enum LlmBackend {
    Gemini {
        api_key: String,
        model: String,
        alternates: Vec<String>,
    },
    OpenAI {
        api_key: String,
        model: String,
    },
    Ollama {
        host: String,
        port: u16,
        model: String,
    },
    None,
}

/// Explicit backend selection, built once at startup and passed to whoever
/// needs an LLM. Tests construct it directly instead of touching the
/// environment.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            backend: LlmBackend::None,
            temperature: 0.7,
            timeout: Duration::from_secs(120),
        }
    }
}

impl LlmConfig {
    /// Google keys win over OpenAI, OpenAI over a local Ollama server.
    pub fn from_env() -> Self {
        let temperature = env_var_or("LLM_TEMPERATURE", 0.7f32);
        let timeout = Duration::from_secs(env_var_or("LLM_TIMEOUT_SECS", 120u64));

        let google_key = first_env_var(&["GOOGLE_API_KEY", "GOOGLE_AI_API_KEY", "GEMINI_API_KEY"]);
        let openai_key = first_env_var(&["OPENAI_API_KEY"]);

        let backend = if let Some(api_key) = google_key {
            let model = first_env_var(&["GEMINI_MODEL"])
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
            let mut alternates = get_env_var_as_vec("GEMINI_MODEL_FALLBACKS", ';');
            if alternates.is_empty() {
                alternates = DEFAULT_GEMINI_ALTERNATES.iter().map(|m| m.to_string()).collect();
            }
            LlmBackend::Gemini {
                api_key,
                model: clean_model_name(&model),
                alternates,
            }
        } else if let Some(api_key) = openai_key {
            LlmBackend::OpenAI {
                api_key,
                model: first_env_var(&["OPENAI_MODEL"])
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            }
        } else if let Some(host) = first_env_var(&["OLLAMA_HOST"]) {
            LlmBackend::Ollama {
                host,
                port: env_var_or("OLLAMA_PORT", 11434u16),
                model: first_env_var(&["OLLAMA_MODEL"])
                    .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            }
        } else {
            warn!("No AI API key configured, all generators will use local fallbacks");
            LlmBackend::None
        };

        LlmConfig {
            backend,
            temperature,
            timeout,
        }
    }

    /// Builds the client described by this configuration.
    pub fn build_params(&self) -> Result<LLMParams> {
        let (llm_client, model) = match &self.backend {
            LlmBackend::Gemini {
                api_key,
                model,
                alternates,
            } => {
                info!("Using Gemini model {}", model);
                let mut models = vec![model.clone()];
                models.extend(alternates.iter().filter(|m| *m != model).cloned());
                (
                    LLMClient::Gemini(GeminiClient::new(api_key, models, self.timeout)?),
                    model.clone(),
                )
            }
            LlmBackend::OpenAI { api_key, model } => {
                info!("Using OpenAI model {}", model);
                let config = OpenAIConfig::new().with_api_key(api_key);
                (LLMClient::OpenAI(OpenAIClient::with_config(config)), model.clone())
            }
            LlmBackend::Ollama { host, port, model } => {
                info!("Connecting to Ollama at {}:{}", host, port);
                (LLMClient::Ollama(Ollama::new(host.clone(), *port)), model.clone())
            }
            LlmBackend::None => (LLMClient::Unavailable, String::new()),
        };

        Ok(LLMParams {
            llm_client,
            model,
            temperature: self.temperature,
            timeout: self.timeout,
        })
    }
}

/// Strips the `models/` prefix the Google console shows in front of model ids.
pub fn clean_model_name(model: &str) -> String {
    model.trim().trim_start_matches("models/").to_string()
}
