//! Cultural and historical background for a news article.
//!
//! The model is asked first; its description is only shown when it clears
//! every generic-text check. Anything else (no backend, a failed call, bad
//! JSON, a vague description) ends in a deterministic fallback built from the
//! article's own facts.

pub mod detector;
pub mod fallback;
pub mod rules;
pub mod signals;
pub mod templates;
pub mod topic;

use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub use detector::{evaluate, evaluate_for_acceptance, is_generic, GenericReason, ValidationVerdict};
pub use fallback::fallback_description;
pub use signals::{extract, ExtractedSignals};
pub use topic::{classify, fallback_title, Topic};

use crate::json;
use crate::llm::TextGenerator;
use crate::prompt::{cultural_context_prompt, cultural_context_system};
use crate::types::{ArticleRequest, CulturalContext, Level};
use crate::TARGET_CONTEXT;

pub const MAX_EXAMPLES: usize = 5;

const DEFAULT_EXAMPLES: &[&str] = &["global perspective", "cultural awareness", "societal impact"];

lazy_static! {
    static ref EXAMPLE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:global|international|worldwide|societal|cultural)\s+\w+").unwrap(),
        Regex::new(r"(?i)\b(?:policy|strategy|initiative|movement|trend)\b").unwrap(),
        Regex::new(r"(?i)\b(?:awareness|understanding|perspective|viewpoint)\b").unwrap(),
    ];
}

/// Reply shape requested from the model. Fields are loose values so a wrong
/// type on one field does not discard the others.
#[derive(Debug, Default, Deserialize)]
struct ContextReply {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    examples: Option<Value>,
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Short phrases from the article worth studying, or a neutral default set.
pub fn extract_cultural_examples(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let examples: Vec<String> = EXAMPLE_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .find_iter(content)
                .take(2)
                .map(|m| m.as_str().to_lowercase())
        })
        .filter(|example| seen.insert(example.clone()))
        .take(MAX_EXAMPLES)
        .collect();

    if examples.is_empty() {
        DEFAULT_EXAMPLES.iter().map(|s| s.to_string()).collect()
    } else {
        examples
    }
}

/// Validates an inbound article, then builds its context.
pub async fn cultural_context_for_request(
    llm: &dyn TextGenerator,
    request: &ArticleRequest,
) -> Result<CulturalContext> {
    request.validate()?;
    Ok(generate_cultural_context(llm, &request.title, &request.content, request.level).await)
}

/// Always returns a context: either the model's, once validated, or the
/// deterministic fallback.
pub async fn generate_cultural_context(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Level,
) -> CulturalContext {
    let signals = extract(title, content);
    let topic = classify(title, content);
    debug!(target: TARGET_CONTEXT, "Topic '{}', {} key entities", topic, signals.key_entities.len());

    if !llm.is_available() {
        info!(target: TARGET_CONTEXT, "No LLM configured, using fallback context");
        return fallback_context(title, content, topic, &signals, level);
    }

    match request_context(llm, title, content, topic, &signals, level).await {
        Ok(context) => {
            info!(target: TARGET_CONTEXT, "Description passed validation ({} chars)", context.description.chars().count());
            context
        }
        Err(e) => {
            warn!(target: TARGET_CONTEXT, "Using fallback context: {}", e);
            fallback_context(title, content, topic, &signals, level)
        }
    }
}

async fn request_context(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    topic: Topic,
    signals: &ExtractedSignals,
    level: Level,
) -> Result<CulturalContext> {
    let prompt = cultural_context_prompt(title, content, topic, signals, level);
    let response = llm
        .generate_text(&prompt, Some(&cultural_context_system()))
        .await?;

    let reply: ContextReply = json::parse_json_object(&response)?;
    let description = reply
        .description
        .as_ref()
        .and_then(non_empty_string)
        .unwrap_or_default();

    let verdict = evaluate_for_acceptance(&description);
    if verdict.is_generic {
        let reasons: Vec<String> = verdict.reasons.iter().map(|r| r.to_string()).collect();
        info!(
            target: TARGET_CONTEXT,
            "Rejected description: {:.100}",
            description
        );
        bail!("description failed validation: {}", reasons.join("; "));
    }

    let context_title = reply
        .title
        .as_ref()
        .and_then(non_empty_string)
        .unwrap_or_else(|| fallback_title(topic, title));

    let examples: Vec<String> = match reply.examples {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(non_empty_string)
            .take(MAX_EXAMPLES)
            .collect(),
        _ => Vec::new(),
    };
    let examples = if examples.is_empty() {
        extract_cultural_examples(content)
    } else {
        examples
    };

    Ok(CulturalContext {
        title: context_title,
        description,
        examples,
    })
}

fn fallback_context(
    title: &str,
    content: &str,
    topic: Topic,
    signals: &ExtractedSignals,
    level: Level,
) -> CulturalContext {
    CulturalContext {
        title: fallback_title(topic, title),
        description: fallback_description(topic, level, title, content, signals),
        examples: extract_cultural_examples(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct Scripted(Option<String>);

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate_text(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
            self.0.clone().ok_or_else(|| anyhow!("provider down"))
        }
    }

    struct Offline;

    #[async_trait]
    impl TextGenerator for Offline {
        async fn generate_text(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
            panic!("offline generator must not be called");
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    const TITLE: &str = "Climate talks resume";
    const CONTENT: &str = "Delegates met to discuss emission targets and a global strategy.";
    const GOOD: &str = "In 2015, 196 parties adopted the Paris Agreement at a summit held in France. \
        The deal asked each government to publish its own plan for cutting emissions. \
        China and the United States both joined the accord before it took effect in 2016. \
        Later reviews in 2021 at Glasgow pushed for faster cuts in coal use.";

    fn reply(description: &str, examples: &str) -> Scripted {
        Scripted(Some(format!(
            "```json\n{{\"title\": \"The Road to Paris\", \"description\": {}, \"examples\": {}}}\n```\nHope this helps!",
            serde_json::to_string(description).unwrap(),
            examples
        )))
    }

    #[test]
    fn test_extract_cultural_examples() {
        let examples = extract_cultural_examples(
            "A Global Summit shaped policy. Global Summit talks, a new strategy, a trend, and public awareness.",
        );
        assert_eq!(examples, vec!["global summit", "policy", "strategy", "awareness"]);

        assert_eq!(
            extract_cultural_examples("Rain fell."),
            vec!["global perspective", "cultural awareness", "societal impact"]
        );
    }

    #[tokio::test]
    async fn test_accepts_specific_reply() {
        let llm = reply(GOOD, r#"["Paris Agreement", "", 7, "net zero"]"#);
        let context = generate_cultural_context(&llm, TITLE, CONTENT, Level::Intermediate).await;
        assert_eq!(context.title, "The Road to Paris");
        assert_eq!(context.description, GOOD);
        assert_eq!(context.examples, vec!["Paris Agreement", "net zero"]);
    }

    #[tokio::test]
    async fn test_missing_examples_are_extracted() {
        let llm = reply(GOOD, "[]");
        let context = generate_cultural_context(&llm, TITLE, CONTENT, Level::Intermediate).await;
        assert_eq!(context.examples, vec!["global strategy", "strategy"]);
    }

    #[tokio::test]
    async fn test_rejects_generic_reply() {
        let generic = "This topic has important cultural background. Understanding the context helps \
            interpret news about this subject. Different cultures and historical experiences shape how \
            people view this topic, and it is discussed around the world by many groups in many ways today.";
        let llm = reply(generic, r#"["culture"]"#);
        let context = generate_cultural_context(&llm, TITLE, CONTENT, Level::Beginner).await;

        assert_eq!(context.title, "Climate Change and Global Environmental Policy");
        assert_ne!(context.description, generic);
        assert!(!is_generic(&context.description));
    }

    #[tokio::test]
    async fn test_provider_failure_and_offline_fall_back() {
        let failed = generate_cultural_context(&Scripted(None), TITLE, CONTENT, Level::Advanced).await;
        let offline = generate_cultural_context(&Offline, TITLE, CONTENT, Level::Advanced).await;
        assert_eq!(failed, offline);
        assert!(!is_generic(&offline.description));

        let garbage = Scripted(Some("no json here".to_string()));
        let context = generate_cultural_context(&garbage, TITLE, CONTENT, Level::Advanced).await;
        assert_eq!(context, offline);
    }
}
