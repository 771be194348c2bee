//! Scored feedback on a learner's written answer.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::json;
use crate::llm::TextGenerator;
use crate::prompt::{writing_feedback_prompt, writing_feedback_system};
use crate::types::{FeedbackRequest, FeedbackSection, WritingFeedback};
use crate::TARGET_FEEDBACK;

const LONG_SENTENCE_WORDS: usize = 25;
const SHORT_TEXT_WORDS: usize = 80;

const DEFAULT_GRAMMAR_SCORE: u8 = 75;
const DEFAULT_VOCABULARY_SCORE: u8 = 80;
const DEFAULT_STRUCTURE_SCORE: u8 = 70;
const NO_FEEDBACK: &str = "No feedback available";
const ERROR_PROCESSING: &str = "Error processing";

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]\s+").unwrap();
    static ref PASSIVE_VOICE: Regex = Regex::new(r"(?i)\b(?:is|are|was|were|been|being)\s+\w+ed\b").unwrap();
    static ref PLAIN_ADJECTIVE: Regex = Regex::new(r"(?i)\b(?:very|really|good|bad|nice)\b").unwrap();
    static ref OVERUSED_WORD: Regex = Regex::new(r"(?i)\b(?:important|interesting|problem)\b").unwrap();
    static ref DRAFT_REPLACEMENTS: Vec<(Regex, &'static str)> = [
        (r"(?i)\bvery good\b", "excellent"),
        (r"(?i)\bvery important\b", "crucial"),
        (r"(?i)\bI think\b", "I believe"),
        (r"(?i)\bpeople\b", "individuals"),
        (r"(?i)\bthings\b", "aspects"),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
    .collect();
}

/// Sentences split after terminal punctuation followed by whitespace; the
/// punctuation stays with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Rule-based stand-in for the model: counts long sentences, passive
/// constructions and filler words.
pub fn heuristic_feedback(text: &str) -> WritingFeedback {
    let sentences = split_sentences(text);
    let word_count = text.split_whitespace().count();
    let long_sentences = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count();
    let passive = PASSIVE_VOICE.find_iter(text).count();
    let says_i_think = text.contains("I think");
    debug!(
        target: TARGET_FEEDBACK,
        "Heuristic feedback: {} sentences, {} words, {} long, {} passive",
        sentences.len(),
        word_count,
        long_sentences,
        passive
    );

    let grammar_comments = vec![
        if long_sentences > 0 {
            "Several sentences are long. Split them up to make the text easier to read."
        } else {
            "Sentence length is appropriate and easy to read."
        },
        if passive > 0 {
            "Passive voice appears often. Try using the active voice as well."
        } else {
            "Sentence structure is fairly natural."
        },
        if word_count < SHORT_TEXT_WORDS {
            "The text is a little short. Add a bit more supporting detail."
        } else {
            "The length is sufficient and your opinion is well developed."
        },
    ];

    let vocabulary_comments = vec![
        if PLAIN_ADJECTIVE.is_match(text) {
            "Use more precise words instead of simple adjectives."
        } else {
            "Word choice is fairly consistent."
        },
        if says_i_think {
            "Vary \"I think\" with expressions like \"I believe\" or \"In my view\"."
        } else {
            "Opinion expressions are used appropriately."
        },
        if OVERUSED_WORD.is_match(text) {
            "Consider synonyms such as \"critical\", \"noteworthy\" or \"challenge\"."
        } else {
            "Vocabulary is varied."
        },
    ];

    let structure_comments = vec![
        if sentences.len() >= 3 {
            "Separate the introduction, body and conclusion more clearly."
        } else {
            "There are too few paragraphs. Aim for at least three."
        },
        if text.contains("because") || text.contains("therefore") {
            "Connectors linking reasons and results are used well."
        } else {
            "Adding connectors that explain your logic will make the text more persuasive."
        },
        if text.trim().ends_with('.') {
            "The closing sentence is clear."
        } else {
            "Finish the text with a complete sentence."
        },
    ];

    let suggestions = vec![
        if says_i_think {
            "I think → I believe / From my perspective"
        } else {
            "Use expressions like \"Furthermore\" or \"Moreover\" to link sentences."
        },
        if long_sentences > 0 {
            "Break long sentences into two or more shorter ones."
        } else {
            "Add a concrete example to support your main point."
        },
        if passive > 0 {
            "Prefer the active voice to make the writing more vivid."
        } else {
            "Use adjectives or adverbs to emphasize feelings or opinions."
        },
    ];

    let grammar_score = 100i64 - 5 * long_sentences as i64 - 3 * passive as i64;
    let structure_score = (60 + 5 * sentences.len()).min(85);

    WritingFeedback {
        grammar: FeedbackSection {
            score: grammar_score.max(60) as u8,
            comments: to_strings(&grammar_comments),
        },
        vocabulary: FeedbackSection {
            score: 80,
            comments: to_strings(&vocabulary_comments),
        },
        structure: FeedbackSection {
            score: structure_score as u8,
            comments: to_strings(&structure_comments),
        },
        suggestions: to_strings(&suggestions),
        improved: improved_draft(text),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Swaps a few weak phrases and makes sure the text ends with a period.
pub fn improved_draft(text: &str) -> String {
    let mut improved = text.to_string();
    for (pattern, replacement) in DRAFT_REPLACEMENTS.iter() {
        improved = pattern.replace_all(&improved, *replacement).into_owned();
    }
    if !improved.ends_with('.') {
        improved = format!("{}.", improved.trim());
    }
    improved
}

fn parse_section(value: Option<&Value>, default_score: u8) -> FeedbackSection {
    let Some(section) = value.filter(|v| v.is_object()) else {
        return FeedbackSection::new(default_score, NO_FEEDBACK);
    };
    let score = section
        .get("score")
        .and_then(Value::as_f64)
        .map(|s| s.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(default_score);
    let comments = string_list(section.get("comments"));
    FeedbackSection { score, comments }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn error_feedback(text: &str) -> WritingFeedback {
    WritingFeedback {
        grammar: FeedbackSection::new(DEFAULT_GRAMMAR_SCORE, ERROR_PROCESSING),
        vocabulary: FeedbackSection::new(DEFAULT_VOCABULARY_SCORE, ERROR_PROCESSING),
        structure: FeedbackSection::new(DEFAULT_STRUCTURE_SCORE, ERROR_PROCESSING),
        suggestions: Vec::new(),
        improved: text.to_string(),
    }
}

/// Model feedback with per-section defaults; heuristic feedback when no model
/// is configured.
pub async fn get_writing_feedback(
    llm: &dyn TextGenerator,
    request: &FeedbackRequest,
) -> WritingFeedback {
    if !llm.is_available() {
        info!(target: TARGET_FEEDBACK, "No LLM configured, using heuristic feedback");
        return heuristic_feedback(&request.text);
    }

    match request_feedback(llm, request).await {
        Ok(feedback) => feedback,
        Err(e) => {
            warn!(target: TARGET_FEEDBACK, "Error getting writing feedback: {}", e);
            error_feedback(&request.text)
        }
    }
}

async fn request_feedback(
    llm: &dyn TextGenerator,
    request: &FeedbackRequest,
) -> Result<WritingFeedback> {
    let prompt = writing_feedback_prompt(request);
    let response = llm
        .generate_text(&prompt, Some(&writing_feedback_system(request.level)))
        .await?;
    let reply: Value = json::parse_json_object(&response)?;

    let improved = reply
        .get("improved")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| request.text.clone());

    Ok(WritingFeedback {
        grammar: parse_section(reply.get("grammar"), DEFAULT_GRAMMAR_SCORE),
        vocabulary: parse_section(reply.get("vocabulary"), DEFAULT_VOCABULARY_SCORE),
        structure: parse_section(reply.get("structure"), DEFAULT_STRUCTURE_SCORE),
        suggestions: string_list(reply.get("suggestions")),
        improved,
    })
}
