pub mod context;
pub mod environment;
pub mod feedback;
pub mod json;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod question;
pub mod quiz;
pub mod rephrase;
pub mod summary;
pub mod types;

use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use ollama_rs::Ollama;
use std::time::Duration;

pub use context::{cultural_context_for_request, generate_cultural_context};
pub use feedback::get_writing_feedback;
pub use llm::{GeminiClient, TextGenerator};
pub use question::generate_question;
pub use quiz::{generate_quiz, quiz_for_request};
pub use rephrase::rephrase_text;
pub use summary::generate_news_summary;
pub use types::*;

pub const TARGET_LLM_REQUEST: &str = "llm_request";
pub const TARGET_CONTEXT: &str = "cultural_context";
pub const TARGET_QUIZ: &str = "quiz";
pub const TARGET_QUESTION: &str = "question";
pub const TARGET_FEEDBACK: &str = "feedback";
pub const TARGET_SUMMARY: &str = "summary";
pub const TARGET_REPHRASE: &str = "rephrase";

/// The backend that answers prompts. `Unavailable` is a real state, not an
/// error: every generator has a local fallback for it.
#[derive(Clone, Debug)]
pub enum LLMClient {
    Ollama(Ollama),
    OpenAI(OpenAIClient<OpenAIConfig>),
    Gemini(GeminiClient),
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct LLMParams {
    pub llm_client: LLMClient,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl LLMParams {
    /// Parameters with no backend behind them.
    pub fn unavailable() -> Self {
        LLMParams {
            llm_client: LLMClient::Unavailable,
            model: String::new(),
            temperature: 0.7,
            timeout: Duration::from_secs(120),
        }
    }
}
