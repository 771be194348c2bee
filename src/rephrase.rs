//! One text rewritten for beginner, intermediate and advanced readers.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

use crate::json::{self, truncate_chars};
use crate::llm::TextGenerator;
use crate::prompt::{rephrase_prompt, rephrase_system};
use crate::types::Rephrased;
use crate::TARGET_REPHRASE;

const BEGINNER_SENTENCE_WORDS: usize = 15;
const BEGINNER_EXTRA_CHARS: usize = 50;

fn compile(table: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .map(|(word, replacement)| {
            (Regex::new(&format!(r"(?i)\b{}\b", word)).unwrap(), *replacement)
        })
        .collect()
}

lazy_static! {
    static ref SIMPLER_WORDS: Vec<(Regex, &'static str)> = compile(&[
        ("comprehensive", "complete"),
        ("implement", "do"),
        ("significant", "important"),
        ("strategy", "plan"),
        ("develop", "make"),
        ("analyze", "look at"),
        ("establish", "make"),
        ("emphasize", "say"),
        ("facilitate", "help"),
        ("substantiate", "show"),
    ]);
    static ref RICHER_WORDS: Vec<(Regex, &'static str)> = compile(&[
        ("complete", "comprehensive"),
        ("do", "implement"),
        ("important", "significant"),
        ("plan", "strategy"),
        ("make", "develop"),
        (r"look\s+at", "analyze"),
        ("say", "emphasize"),
        ("help", "facilitate"),
        ("show", "substantiate"),
    ]);
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]\s+").unwrap();
    static ref CLAUSE_BREAK: Regex = Regex::new(r",\s+").unwrap();
}

fn replace_words(text: &str, table: &[(Regex, &'static str)]) -> String {
    table.iter().fold(text.to_string(), |acc, (pattern, replacement)| {
        pattern.replace_all(&acc, *replacement).into_owned()
    })
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Plainer words; long sentences cut at their first clause.
pub fn simplify_for_beginner(text: &str) -> String {
    let simplified = replace_words(text, &SIMPLER_WORDS);
    let shortened: Vec<String> = split_sentences(&simplified)
        .into_iter()
        .map(|sentence| {
            if sentence.split_whitespace().count() <= BEGINNER_SENTENCE_WORDS {
                return sentence.to_string();
            }
            let mut parts = CLAUSE_BREAK.split(sentence);
            match (parts.next(), parts.next()) {
                (Some(first), Some(_)) => format!("{}.", first),
                _ => sentence.to_string(),
            }
        })
        .collect();

    let joined = shortened.join(" ");
    truncate_chars(&joined, text.chars().count() + BEGINNER_EXTRA_CHARS).to_string()
}

pub fn enhance_for_advanced(text: &str) -> String {
    replace_words(text, &RICHER_WORDS)
}

/// Used when the model is unavailable, fails, or returns the same text three times.
pub fn fallback_rephrase(text: &str) -> Rephrased {
    Rephrased {
        beginner: simplify_for_beginner(text),
        intermediate: text.to_string(),
        advanced: enhance_for_advanced(text),
    }
}

pub async fn rephrase_text(llm: &dyn TextGenerator, text: &str) -> Rephrased {
    if !llm.is_available() {
        info!(target: TARGET_REPHRASE, "No LLM configured, using rule-based rephrasing");
        return fallback_rephrase(text);
    }

    match request_rephrase(llm, text).await {
        Ok(rephrased) => rephrased,
        Err(e) => {
            warn!(target: TARGET_REPHRASE, "Error rephrasing text: {}", e);
            fallback_rephrase(text)
        }
    }
}

async fn request_rephrase(llm: &dyn TextGenerator, text: &str) -> Result<Rephrased> {
    let response = llm
        .generate_text(&rephrase_prompt(text), Some(&rephrase_system()))
        .await?;
    let reply: Value = json::parse_json_object(&response)?;

    let level = |key: &str| {
        reply
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| text.to_string())
    };
    let rephrased = Rephrased {
        beginner: level("beginner"),
        intermediate: level("intermediate"),
        advanced: level("advanced"),
    };

    if rephrased.beginner == rephrased.intermediate && rephrased.intermediate == rephrased.advanced {
        warn!(target: TARGET_REPHRASE, "All rephrased versions are identical, using rule-based versions");
        return Ok(fallback_rephrase(text));
    }
    Ok(rephrased)
}
