use anyhow::{anyhow, bail, Context, Result};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::generation::options::GenerationOptions;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::{LLMClient, LLMParams, TARGET_LLM_REQUEST};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Anything that can turn a prompt into text. Generators only see this trait,
/// so tests can script replies or simulate a provider outage.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str, system: Option<&str>) -> Result<String>;

    /// False when no backend is configured at all. Generators with a
    /// dedicated offline path check this before building a prompt.
    fn is_available(&self) -> bool {
        true
    }
}

#[async_trait]
impl TextGenerator for LLMParams {
    async fn generate_text(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        generate_llm_response(prompt, system, self).await
    }

    fn is_available(&self) -> bool {
        !matches!(self.llm_client, LLMClient::Unavailable)
    }
}

/// Sends one request to the configured backend. No retries: callers treat any
/// error as the signal to use their local fallback.
pub async fn generate_llm_response(
    prompt: &str,
    system: Option<&str>,
    params: &LLMParams,
) -> Result<String> {
    debug!(target: TARGET_LLM_REQUEST, "Sending LLM request to model '{}' ({} prompt chars)", params.model, prompt.len());

    let request = async {
        let result: Result<String> = match &params.llm_client {
            LLMClient::Ollama(ollama) => {
                let mut request = GenerationRequest::new(params.model.clone(), prompt.to_string());
                request.options = Some(GenerationOptions::default().temperature(params.temperature));
                request.system = system.map(|s| s.to_string().into());
                let response = ollama
                    .generate(request)
                    .await
                    .map_err(|e| anyhow!("Ollama request failed: {}", e))?;
                Ok(response.response)
            }
            LLMClient::OpenAI(client) => {
                let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();
                if let Some(system) = system {
                    messages.push(
                        ChatCompletionRequestSystemMessageArgs::default()
                            .content(system)
                            .build()?
                            .into(),
                    );
                }
                messages.push(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(prompt)
                        .build()?
                        .into(),
                );

                let request = CreateChatCompletionRequestArgs::default()
                    .model(&params.model)
                    .messages(messages)
                    .temperature(params.temperature)
                    .build()?;

                let response = client
                    .chat()
                    .create(request)
                    .await
                    .context("OpenAI chat completion failed")?;

                Ok(response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .unwrap_or_default())
            }
            LLMClient::Gemini(gemini) => {
                // Gemini has no separate system slot on this endpoint.
                let full_prompt = match system {
                    Some(system) => format!("{}\n\n{}", system, prompt),
                    None => prompt.to_string(),
                };
                gemini.generate(&full_prompt, params.temperature).await
            }
            LLMClient::Unavailable => Err(anyhow!("No AI API key configured")),
        };
        result
    };

    let response_text = match timeout(params.timeout, request).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(target: TARGET_LLM_REQUEST, "Error generating response: {:#}", e);
            return Err(e);
        }
        Err(_) => {
            warn!(target: TARGET_LLM_REQUEST, "LLM request timed out after {:?}", params.timeout);
            bail!("LLM request timed out after {:?}", params.timeout);
        }
    };

    if response_text.trim().is_empty() {
        error!(target: TARGET_LLM_REQUEST, "LLM returned an empty response");
        bail!("LLM returned an empty response");
    }

    debug!(target: TARGET_LLM_REQUEST, "LLM response received: {}", crate::json::truncate_chars(&response_text, 500));
    Ok(response_text)
}

/// Minimal client for the Gemini `generateContent` REST endpoint.
///
/// `models` is an ordered candidate list: the first entry is the configured
/// model, the rest are tried in turn only when the service reports that a
/// model does not exist.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    models: Vec<String>,
    base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("models", &self.models)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: &str, models: Vec<String>, request_timeout: Duration) -> Result<Self> {
        if models.is_empty() {
            bail!("At least one Gemini model is required");
        }
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GeminiClient {
            http,
            api_key: api_key.to_string(),
            models,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        for model in &self.models {
            match self.generate_with_model(model, prompt, temperature).await? {
                Some(text) => return Ok(text),
                None => {
                    warn!(target: TARGET_LLM_REQUEST, "Model {} not found, trying alternative models...", model);
                }
            }
        }
        Err(anyhow!("None of the Gemini models {:?} are available", self.models))
    }

    /// `Ok(None)` means the model does not exist and the next candidate
    /// should be tried; every other failure is final.
    async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<Option<String>> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": temperature },
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Gemini request to {} failed", model))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if error_text.contains("not found") {
                return Ok(None);
            }
            bail!("Gemini returned {}: {}", status, error_text);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_client_errors() {
        let params = LLMParams::unavailable();
        assert!(!params.is_available());
        let result = params.generate_text("prompt", Some("system")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_gemini_requires_a_model() {
        assert!(GeminiClient::new("key", Vec::new(), Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_gemini_debug_hides_key() {
        let client = GeminiClient::new("secret-key", vec!["gemini-pro".into()], Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://localhost:9/");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("gemini-pro"));
        assert_eq!(client.models(), ["gemini-pro".to_string()]);
    }
}
