//! Level-adapted news summaries with study vocabulary and grammar points.

use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

use crate::json::{self, truncate_chars};
use crate::llm::TextGenerator;
use crate::prompt::{news_summary_prompt, news_summary_system};
use crate::types::{Level, NewsSummary};
use crate::TARGET_SUMMARY;

const SUMMARY_PREVIEW_CHARS: usize = 200;
const MAX_KEYWORDS: usize = 5;
const MAX_GRAMMAR_POINTS: usize = 3;

fn default_keywords(level: Level) -> &'static [&'static str] {
    match level {
        Level::Beginner => &["important", "people", "country", "change", "help"],
        Level::Intermediate => &["significant", "analysis", "strategy", "impact", "develop"],
        Level::Advanced => &["substantiate", "comprehensive", "facilitate", "paradigm", "nuanced"],
    }
}

fn default_grammar_points(level: Level) -> &'static [&'static str] {
    match level {
        Level::Beginner => &["Simple present tense", "Basic past tense", "Simple questions"],
        Level::Intermediate => &["Present perfect tense", "Passive voice", "Conditional sentences"],
        Level::Advanced => &["Subjunctive mood", "Inverted conditionals", "Complex noun phrases"],
    }
}

fn preview(content: &str) -> String {
    format!("{}...", truncate_chars(content, SUMMARY_PREVIEW_CHARS))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Summary made without a model: the opening of the article plus the
/// level's default study lists.
pub fn fallback_summary(content: &str, level: Level) -> NewsSummary {
    NewsSummary {
        summary: preview(content),
        keywords: owned(default_keywords(level)),
        grammar_points: owned(default_grammar_points(level)),
    }
}

fn string_list(value: Option<&Value>, max: usize) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .take(max)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub async fn generate_news_summary(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Level,
) -> NewsSummary {
    if !llm.is_available() {
        info!(target: TARGET_SUMMARY, "No LLM configured, using default summary");
        return fallback_summary(content, level);
    }

    match request_summary(llm, title, content, level).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!(target: TARGET_SUMMARY, "Error generating news summary: {}", e);
            fallback_summary(content, level)
        }
    }
}

async fn request_summary(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Level,
) -> Result<NewsSummary> {
    let prompt = news_summary_prompt(title, content, level);
    let response = llm
        .generate_text(&prompt, Some(&news_summary_system(level)))
        .await?;
    let reply: Value = json::parse_json_object(&response)?;

    let summary = reply
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| preview(content));

    let mut keywords = string_list(reply.get("keywords"), MAX_KEYWORDS);
    if keywords.is_empty() {
        keywords = owned(default_keywords(level));
    }
    let mut grammar_points = string_list(reply.get("grammarPoints"), MAX_GRAMMAR_POINTS);
    if grammar_points.is_empty() {
        grammar_points = owned(default_grammar_points(level));
    }

    Ok(NewsSummary {
        summary,
        keywords,
        grammar_points,
    })
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

    #[test]
    fn test_fallback_summary() {
        let content = "a".repeat(300);
        let summary = fallback_summary(&content, Level::Advanced);
        assert_eq!(summary.summary, format!("{}...", "a".repeat(200)));
        assert_eq!(summary.keywords[0], "substantiate");
        assert_eq!(summary.grammar_points.len(), 3);
    }

    #[tokio::test]
    async fn test_model_summary_is_cleaned() {
        let llm = Scripted(Some(
            r#"{"summary": " Prices rose. ", "keywords": ["rise", "", 3, "cost", "a", "b", "c", "d"], "grammarPoints": []}"#
                .to_string(),
        ));
        let summary = generate_news_summary(&llm, "Prices", "Prices rose again.", Level::Beginner).await;
        assert_eq!(summary.summary, "Prices rose.");
        assert_eq!(summary.keywords, vec!["rise", "cost", "a", "b", "c"]);
        assert_eq!(
            summary.grammar_points,
            vec!["Simple present tense", "Basic past tense", "Simple questions"]
        );
    }

    #[tokio::test]
    async fn test_failure_uses_level_defaults() {
        let summary = generate_news_summary(&Scripted(None), "t", "Short body", Level::Intermediate).await;
        assert_eq!(summary, fallback_summary("Short body", Level::Intermediate));
        assert_eq!(summary.summary, "Short body...");
    }
}
