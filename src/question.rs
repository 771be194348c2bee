//! Open-ended writing questions about an article.

use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::json::truncate_chars;
use crate::llm::TextGenerator;
use crate::prompt::{writing_question_prompt, writing_question_system};
use crate::types::Level;
use crate::TARGET_QUESTION;

const QUESTION_CONTENT_CHARS: usize = 8000;
const MAX_KEY_TOPICS: usize = 15;
const MIN_QUESTION_CHARS: usize = 40;
const MIN_KEY_SENTENCE_CHARS: usize = 20;

const TOPIC_STOPWORDS: &[&str] = &[
    "this", "that", "these", "those", "their", "there", "would", "could", "should",
];

lazy_static! {
    static ref PROPER_NOUN: Regex = Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap();
    static ref NUMERIC_PHRASE: Regex = Regex::new(
        r"(?i)\d+%|\$\d+|\d+\s+(?:million|billion|thousand|percent|people|countries|jobs|dollars)"
    )
    .unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref ANSWER_PREFIXES: Vec<Regex> = vec![
        Regex::new(r"(?i)^Question:\s*").unwrap(),
        Regex::new(r"(?i)^Q:\s*").unwrap(),
        Regex::new(r"(?i)^Here's\s+(?:the\s+)?question:\s*").unwrap(),
        Regex::new(r"(?i)^The\s+question\s+is:\s*").unwrap(),
    ];
    static ref DEBATE_PATTERNS: Vec<Regex> = [
        r"(?i)what\s+is\s+your\s+position\s+on\s+this\s+debate",
        r"(?i)which\s+side\s+do\s+you\s+support",
        r"(?i)do\s+you\s+agree\s+or\s+disagree",
        r"(?i)what\s+are\s+the\s+two\s+sides",
        r"(?i)some\s+argue.*while\s+others.*what\s+is\s+your\s+position",
        r"(?i)which\s+perspective\s+do\s+you\s+support",
        r"(?i)which\s+side\s+of\s+this\s+debate",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
    static ref ARTICLE_REFERENCE: Regex = Regex::new(
        r"(?i)(?:article|news|report|story|discusses?|mentions?|describes?|reports?|according\s+to)"
    )
    .unwrap();
}

/// Level-appropriate question used whenever the model's is missing or rejected.
pub fn fallback_question(level: Level) -> &'static str {
    match level {
        Level::Beginner => {
            "What do you think about this article? Write your opinion in simple English."
        }
        Level::Intermediate => {
            "What is your opinion on the topic discussed in this article? Please explain your thoughts and reasoning."
        }
        Level::Advanced => {
            "After reading this article, what is your perspective on the issues it discusses? Please provide a thoughtful analysis."
        }
    }
}

/// Proper nouns, numeric phrases and frequent words, deduplicated ignoring case.
pub fn key_topics(text: &str) -> Vec<String> {
    let proper_nouns = PROPER_NOUN.find_iter(text).take(5).map(|m| m.as_str().to_string());
    let numbers = NUMERIC_PHRASE.find_iter(text).take(3).map(|m| m.as_str().to_string());

    let cleaned = NON_WORD.replace_all(&text.to_lowercase(), " ").into_owned();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 4 && !TOPIC_STOPWORDS.contains(w))
    {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    let top_words = order.into_iter().take(10).map(str::to_string);

    let mut seen = HashSet::new();
    proper_nouns
        .chain(numbers)
        .chain(top_words)
        .filter(|topic| seen.insert(topic.to_lowercase()))
        .take(MAX_KEY_TOPICS)
        .collect()
}

/// First three, middle two and last two developed sentences, without repeats.
pub fn key_sentences(text: &str) -> String {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(text)
        .filter(|s| s.trim().chars().count() > MIN_KEY_SENTENCE_CHARS)
        .map(str::trim)
        .collect();
    let n = sentences.len();
    let middle = n / 2;

    let mut seen = HashSet::new();
    sentences
        .iter()
        .take(3)
        .chain(sentences.iter().skip(middle).take(2))
        .chain(sentences.iter().skip(n.saturating_sub(2)))
        .filter(|s| seen.insert(**s))
        .copied()
        .collect::<Vec<_>>()
        .join(". ")
}

/// Strips "Question:" style lead-ins the model sometimes adds.
pub fn clean_question(raw: &str) -> String {
    let mut question = raw.trim().to_string();
    for prefix in ANSWER_PREFIXES.iter() {
        question = prefix.replace(&question, "").into_owned();
    }
    question.trim().to_string()
}

pub fn is_debate_question(question: &str) -> bool {
    DEBATE_PATTERNS.iter().any(|p| p.is_match(question))
}

pub fn references_article(question: &str, topics: &[String]) -> bool {
    let lower = question.to_lowercase();
    ARTICLE_REFERENCE.is_match(question)
        || topics.iter().any(|t| lower.contains(&t.to_lowercase()))
}

/// Asks the model for a question; checks it is open-ended and tied to the
/// article, else returns [`fallback_question`].
pub async fn generate_question(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Level,
) -> String {
    if !llm.is_available() {
        info!(target: TARGET_QUESTION, "No LLM configured, using fallback question");
        return fallback_question(level).to_string();
    }

    match request_question(llm, title, content, level).await {
        Ok(question) => question,
        Err(e) => {
            warn!(target: TARGET_QUESTION, "Using fallback question: {}", e);
            fallback_question(level).to_string()
        }
    }
}

async fn request_question(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    level: Level,
) -> Result<String> {
    let article = truncate_chars(content, QUESTION_CONTENT_CHARS);
    let topics = key_topics(&format!("{} {}", title, article));
    let prompt = writing_question_prompt(title, article, &topics, &key_sentences(article), level);

    let response = llm
        .generate_text(&prompt, Some(&writing_question_system(level)))
        .await?;
    let question = clean_question(&response);

    if is_debate_question(&question) {
        bail!("debate-style question: {:.100}", question);
    }
    if question.chars().count() <= MIN_QUESTION_CHARS || !references_article(&question, &topics) {
        bail!("question too generic or not about the article: {:.100}", question);
    }

    Ok(question)
}
