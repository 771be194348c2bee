//! Context-based vocabulary quizzes.

use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::json::{self, truncate_chars};
use crate::llm::TextGenerator;
use crate::prompt::{quiz_prompt, quiz_system};
use crate::types::{Level, QuizItem, QuizRequest};
use crate::TARGET_QUIZ;

pub const OPTION_COUNT: usize = 4;
pub const MAX_QUIZ_ITEMS: usize = 10;
pub const MAX_FALLBACK_ITEMS: usize = 5;
const QUIZ_CONTENT_CHARS: usize = 3000;
const MAX_FREQUENT_WORDS: usize = 10;
const WORD_CONTEXT_CHARS: usize = 50;

/// Common meaning first, then three plausible wrong readings.
const WORD_MEANINGS: &[(&str, [&str; 4])] = &[
    ("impact", ["effect or influence", "collision or crash", "significance", "consequence"]),
    ("significant", ["important", "meaningful", "notable", "trivial"]),
    ("develop", ["create or build", "grow or expand", "decline", "destroy"]),
    ("analyze", ["examine closely", "study in detail", "ignore", "simplify"]),
    ("strategy", ["plan or approach", "method", "random action", "chaos"]),
    ("implement", ["put into action", "carry out", "abandon", "delay"]),
    ("establish", ["create or set up", "found", "destroy", "remove"]),
    ("emphasize", ["stress or highlight", "focus on", "ignore", "minimize"]),
    ("comprehensive", ["complete or thorough", "extensive", "limited", "partial"]),
    ("facilitate", ["make easier", "help", "hinder", "complicate"]),
    ("substantiate", ["prove or support", "verify", "disprove", "weaken"]),
    ("paradigm", ["model or pattern", "framework", "chaos", "randomness"]),
    ("nuanced", ["subtle or detailed", "complex", "simple", "obvious"]),
    ("article", ["news story", "report", "fiction", "poem"]),
    ("summit", ["peak or meeting", "conference", "valley", "beginning"]),
    ("climate", ["weather patterns", "environment", "weather", "temperature"]),
    ("energy", ["power or force", "strength", "weakness", "exhaustion"]),
    ("renewable", ["sustainable", "reusable", "finite", "depletable"]),
    ("emission", ["release or discharge", "output", "absorption", "retention"]),
    ("policy", ["rule or guideline", "regulation", "chaos", "randomness"]),
];

lazy_static! {
    static ref LOWER_WORD: Regex = Regex::new(r"\b[a-z]{4,}\b").unwrap();
    static ref FIRST_WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Validates an inbound quiz request, then generates the quiz for it. The
/// only error is a request with no title or content.
pub async fn quiz_for_request(llm: &dyn TextGenerator, request: &QuizRequest) -> Result<Vec<QuizItem>> {
    request.validate()?;
    Ok(generate_quiz(llm, &request.title, &request.content, &request.keywords, request.level).await)
}

/// Quiz for an article. Never empty: when the model gives nothing usable the
/// items are built locally from `keywords` or the article's frequent words.
pub async fn generate_quiz(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    keywords: &[String],
    level: Level,
) -> Vec<QuizItem> {
    if !llm.is_available() {
        info!(target: TARGET_QUIZ, "No LLM configured, building fallback quiz");
        return fallback_quiz(content, keywords);
    }

    match request_quiz(llm, title, content, keywords, level).await {
        Ok(items) => items,
        Err(e) => {
            warn!(target: TARGET_QUIZ, "Using fallback quiz: {}", e);
            fallback_quiz(content, keywords)
        }
    }
}

async fn request_quiz(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    keywords: &[String],
    level: Level,
) -> Result<Vec<QuizItem>> {
    let prompt = quiz_prompt(title, truncate_chars(content, QUIZ_CONTENT_CHARS), keywords, level);
    let response = llm.generate_text(&prompt, Some(&quiz_system(level))).await?;
    let raw: Vec<Value> = json::parse_json_array(&response)?;
    debug!(target: TARGET_QUIZ, "Model returned {} quiz items", raw.len());

    let items: Vec<QuizItem> = raw
        .iter()
        .filter_map(|value| match validate_item(value) {
            Ok(item) => Some(item),
            Err(reason) => {
                debug!(target: TARGET_QUIZ, "Dropping quiz item: {}", reason);
                None
            }
        })
        .take(MAX_QUIZ_ITEMS)
        .enumerate()
        .map(|(idx, mut item)| {
            item.id = format!("quiz-{}", idx + 1);
            item
        })
        .collect();

    if items.is_empty() {
        bail!("Invalid quiz format: none of {} items passed validation", raw.len());
    }
    info!(target: TARGET_QUIZ, "Validated {} of {} quiz items", items.len(), raw.len());

    Ok(redistribute_answers(items))
}

/// Integer index, also accepting whole floats such as `1.0`.
fn answer_index(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return Some(n as usize);
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < OPTION_COUNT as f64)
        .map(|f| f as usize)
}

/// Checks one model item. The returned item has an empty id.
fn validate_item(value: &Value) -> Result<QuizItem, &'static str> {
    let question = value
        .get("question")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or("missing or invalid question")?;

    let options = value
        .get("options")
        .and_then(Value::as_array)
        .filter(|options| options.len() == OPTION_COUNT)
        .ok_or("options must be an array of four")?;
    let options: Vec<String> = options
        .iter()
        .map(|option| {
            option
                .as_str()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
        })
        .collect::<Option<Vec<_>>>()
        .ok_or("options must be non-empty strings")?;

    if options.iter().any(|o| is_placeholder(o)) {
        return Err("placeholder option");
    }
    if options.iter().any(|o| o.chars().count() < 2) {
        return Err("option too short");
    }

    let correct_answer = value
        .get("correctAnswer")
        .and_then(answer_index)
        .filter(|n| *n < OPTION_COUNT)
        .ok_or("invalid correctAnswer")?;

    let explanation = value
        .get("explanation")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or("No explanation available")
        .to_string();

    let word = value
        .get("word")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .or_else(|| FIRST_WORD.find(question).map(|m| m.as_str().to_string()))
        .unwrap_or_else(|| "vocabulary".to_string());

    Ok(QuizItem {
        id: String::new(),
        question: question.to_string(),
        options,
        correct_answer,
        explanation,
        word,
    })
}

fn is_placeholder(option: &str) -> bool {
    let lower = option.trim().to_lowercase();
    lower.starts_with("option ") || lower.starts_with("choice ")
}

/// Moves `correct` to position `index`, keeping the wrong options in order.
fn place_answer(options: &[String], correct: usize, index: usize) -> Vec<String> {
    let mut placed: Vec<String> = options
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct)
        .map(|(_, o)| o.clone())
        .collect();
    placed.insert(index.min(placed.len()), options[correct].clone());
    placed
}

/// When every answer sits at the same index, item `i` is rotated so its
/// answer lands at `i % 4`. The option set of each item is unchanged.
pub fn redistribute_answers(items: Vec<QuizItem>) -> Vec<QuizItem> {
    let all_same = items
        .first()
        .map(|first| items.iter().all(|i| i.correct_answer == first.correct_answer))
        .unwrap_or(false);
    if !all_same || items.len() < 2 {
        return items;
    }

    warn!(
        target: TARGET_QUIZ,
        "All correct answers are in position {}, redistributing",
        items[0].correct_answer
    );
    items
        .into_iter()
        .enumerate()
        .map(|(idx, mut item)| {
            let target = idx % OPTION_COUNT;
            item.options = place_answer(&item.options, item.correct_answer, target);
            item.correct_answer = target;
            item
        })
        .collect()
}

/// Most frequent lower-case words of four or more letters, ties in order of
/// first appearance.
pub fn frequent_words(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in LOWER_WORD.find_iter(&lower) {
        let count = counts.entry(m.as_str()).or_insert(0);
        if *count == 0 {
            order.push(m.as_str());
        }
        *count += 1;
    }
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
        .into_iter()
        .take(MAX_FREQUENT_WORDS)
        .map(str::to_string)
        .collect()
}

/// First sentence of `content` containing `word`, cut to fifty characters.
pub fn word_context(content: &str, word: &str) -> Option<String> {
    let needle = word.to_lowercase();
    SENTENCE_SPLIT
        .split(content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .find(|s| s.to_lowercase().contains(&needle))
        .map(|s| {
            if s.chars().count() > WORD_CONTEXT_CHARS {
                format!("{}...", truncate_chars(s, WORD_CONTEXT_CHARS))
            } else {
                s.to_string()
            }
        })
}

fn meanings_for(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    match WORD_MEANINGS.iter().find(|(w, _)| *w == lower) {
        Some((_, meanings)) => meanings.iter().map(|m| m.to_string()).collect(),
        None => vec![
            format!("A key concept related to {}", word),
            format!("An important term meaning {}", word),
            format!("A significant idea about {}", word),
            format!("A central theme involving {}", word),
        ],
    }
}

fn fallback_item(idx: usize, word: &str, content: &str) -> QuizItem {
    let meanings = meanings_for(word);
    let correct_answer = idx % OPTION_COUNT;
    let options = place_answer(&meanings, 0, correct_answer);
    let context = word_context(content, word);

    let (question, explanation) = match &context {
        Some(ctx) => (
            format!("In this article, what does \"{}\" mean in the context of \"{}\"?", word, ctx),
            format!("In this article, \"{}\" means \"{}\" in the context of \"{}\".", word, meanings[0], ctx),
        ),
        None => (
            format!("In this article, what does \"{}\" mean?", word),
            format!("\"{}\" means \"{}\" in this article's context.", word, meanings[0]),
        ),
    };

    QuizItem {
        id: format!("fallback-{}", idx + 1),
        question,
        options,
        correct_answer,
        explanation,
        word: word.to_string(),
    }
}

fn main_topic_item() -> QuizItem {
    QuizItem {
        id: "fallback-1".to_string(),
        question: "Based on the article, what is the main topic?".to_string(),
        options: vec![
            "Current events".to_string(),
            "Important news".to_string(),
            "Recent developments".to_string(),
            "Historical events".to_string(),
        ],
        correct_answer: 0,
        explanation: "This is a fallback question. Please check the article content.".to_string(),
        word: "article".to_string(),
    }
}

/// Locally built quiz: up to five words, answers spread over the positions.
pub fn fallback_quiz(content: &str, keywords: &[String]) -> Vec<QuizItem> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    let words = if keywords.is_empty() {
        frequent_words(content)
    } else {
        keywords
    };

    if words.is_empty() {
        return vec![main_topic_item()];
    }

    words
        .iter()
        .take(MAX_FALLBACK_ITEMS)
        .enumerate()
        .map(|(idx, word)| fallback_item(idx, word, content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;

    struct Scripted(Option<String>);

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate_text(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
            self.0.clone().ok_or_else(|| anyhow!("provider down"))
        }
    }

    fn model_item(word: &str, correct: u64) -> Value {
        json!({
            "question": format!("In this article, what does '{}' mean?", word),
            "options": [format!("{} meaning", word), "second reading", "third reading", "fourth reading"],
            "correctAnswer": correct,
            "explanation": "Quoted from the article.",
            "word": word,
        })
    }

    #[test]
    fn test_validate_item_rules() {
        assert!(validate_item(&model_item("impact", 2)).is_ok());

        let mut item = model_item("impact", 4);
        assert_eq!(validate_item(&item).unwrap_err(), "invalid correctAnswer");

        item = model_item("impact", 0);
        item["options"][1] = json!("Option B");
        assert_eq!(validate_item(&item).unwrap_err(), "placeholder option");

        item = model_item("impact", 0);
        item["options"][3] = json!("x");
        assert_eq!(validate_item(&item).unwrap_err(), "option too short");

        item = model_item("impact", 0);
        item["options"] = json!(["a1", "b2", "c3"]);
        assert!(validate_item(&item).is_err());

        item = model_item("impact", 0);
        item["options"][2] = json!(3);
        assert!(validate_item(&item).is_err());

        item = model_item("impact", 0);
        item["question"] = json!("  ");
        assert!(validate_item(&item).is_err());
    }

    #[test]
    fn test_whole_float_answer_index() {
        let mut item = model_item("impact", 0);
        item["correctAnswer"] = json!(1.0);
        assert_eq!(validate_item(&item).unwrap().correct_answer, 1);

        item["correctAnswer"] = json!(1.5);
        assert_eq!(validate_item(&item).unwrap_err(), "invalid correctAnswer");
        item["correctAnswer"] = json!(4.0);
        assert!(validate_item(&item).is_err());
        item["correctAnswer"] = json!(-1.0);
        assert!(validate_item(&item).is_err());
    }

    #[test]
    fn test_missing_word_and_explanation_default() {
        let mut item = model_item("impact", 1);
        item.as_object_mut().unwrap().remove("word");
        item["explanation"] = json!("");
        let item = validate_item(&item).unwrap();
        assert_eq!(item.word, "In");
        assert_eq!(item.explanation, "No explanation available");
    }

    #[test]
    fn test_redistribution_rotates_answers() {
        let items: Vec<QuizItem> = (0..5)
            .map(|i| {
                let mut item = validate_item(&model_item(&format!("word{}", i), 0)).unwrap();
                item.id = format!("quiz-{}", i + 1);
                item
            })
            .collect();
        let before = items.clone();
        let rotated = redistribute_answers(items);

        let positions: Vec<usize> = rotated.iter().map(|i| i.correct_answer).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 0]);
        for (old, new) in before.iter().zip(&rotated) {
            assert_eq!(old.correct_option(), new.correct_option());
            let mut a = old.options.clone();
            let mut b = new.options.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
        assert_eq!(rotated[2].options, vec!["second reading", "third reading", "word2 meaning", "fourth reading"]);
    }

    #[test]
    fn test_redistribution_leaves_varied_or_single() {
        let varied: Vec<QuizItem> = [1, 3]
            .iter()
            .map(|c| validate_item(&model_item("impact", *c)).unwrap())
            .collect();
        assert_eq!(redistribute_answers(varied.clone()), varied);

        let single = vec![validate_item(&model_item("impact", 2)).unwrap()];
        assert_eq!(redistribute_answers(single.clone()), single);
    }

    #[test]
    fn test_fallback_impact() {
        let content = "The impact of the new policy was significant. Farmers noticed quickly.";
        let quiz = fallback_quiz(content, &["impact".to_string()]);
        assert_eq!(quiz.len(), 1);
        let item = &quiz[0];
        assert_eq!(item.id, "fallback-1");
        assert_eq!(item.correct_answer, 0);
        assert_eq!(item.correct_option(), Some("effect or influence"));
        assert_eq!(
            item.options,
            vec!["effect or influence", "collision or crash", "significance", "consequence"]
        );
        assert_eq!(
            item.question,
            "In this article, what does \"impact\" mean in the context of \"The impact of the new policy was significant\"?"
        );
    }

    #[test]
    fn test_fallback_positions_and_templated_meanings() {
        let keywords: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let quiz = fallback_quiz("No matching sentence here.", &keywords);
        assert_eq!(quiz.len(), MAX_FALLBACK_ITEMS);
        let positions: Vec<usize> = quiz.iter().map(|i| i.correct_answer).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 0]);
        assert_eq!(quiz[1].correct_option(), Some("A key concept related to beta"));
        assert_eq!(quiz[1].question, "In this article, what does \"beta\" mean?");
    }

    #[test]
    fn test_fallback_without_words() {
        let quiz = fallback_quiz("It is. We go.", &[]);
        assert_eq!(quiz, vec![main_topic_item()]);
    }

    #[test]
    fn test_frequent_words_and_context() {
        let content = "Rain fell on the farm. The farm flooded while rain kept falling on every farm.";
        assert_eq!(frequent_words(content)[..3], ["farm", "rain", "fell"]);

        let long = "The committee on agricultural policy debated for several long hours. Then rested.";
        assert_eq!(
            word_context(long, "POLICY").unwrap(),
            "The committee on agricultural policy debated for s..."
        );
        assert_eq!(word_context(long, "absent"), None);
    }

    #[tokio::test]
    async fn test_model_quiz_is_validated_and_numbered() {
        let reply = json!([
            model_item("impact", 0),
            {"question": "broken"},
            model_item("strategy", 0),
        ]);
        let llm = Scripted(Some(format!("Here you go:\n{}", reply)));
        let quiz = generate_quiz(&llm, "t", "c", &[], Level::Beginner).await;

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].id, "quiz-1");
        assert_eq!(quiz[1].id, "quiz-2");
        assert_eq!(quiz[1].correct_answer, 1);
    }

    #[tokio::test]
    async fn test_unusable_reply_falls_back() {
        let llm = Scripted(Some("[{\"question\": \"q\"}]".to_string()));
        let quiz = generate_quiz(&llm, "t", "The impact was large.", &["impact".to_string()], Level::Advanced).await;
        assert_eq!(quiz[0].id, "fallback-1");

        let quiz = generate_quiz(&Scripted(None), "t", "The impact was large.", &[], Level::Advanced).await;
        assert_eq!(quiz[0].word, "impact");
    }
}
