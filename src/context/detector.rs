//! Layered filter that decides whether a description is concrete enough to
//! show a learner. Any layer can veto; the first veto wins.

use serde::Serialize;
use std::fmt;

use super::rules::{
    self, SpecificitySignal, ACCEPT_GENERIC_START_REGEX, ACCEPT_SPECIFIC_START_REGEXES,
    GENERIC_OPENER_REGEX, GENERIC_PATTERN_REGEX, GENERIC_VERB_REGEX, MIN_ACCEPTED_CHARS,
    MIN_DESCRIPTION_CHARS, MIN_DEVELOPED_SENTENCES, MIN_SENTENCE_CHARS, MIN_SPECIFICITY_SCORE,
    SENTENCE_SPLIT, SPECIFICITY_REGEXES, SPECIFIC_OPENER_REGEXES, SUSPICIOUS_PATTERNS,
    SUSPICIOUS_REGEXES,
};

/// Which rule fired. Only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GenericReason {
    TooShort { chars: usize },
    ForbiddenPhrase(&'static str),
    SuspiciousPattern(&'static str),
    LacksSpecifics { score: usize },
    TooFewSentences { count: usize },
    GenericOpener,
    BelowAcceptedLength { chars: usize },
    GenericFirstSentence,
    GenericVerb,
    GenericPattern,
}

impl fmt::Display for GenericReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericReason::TooShort { chars } => write!(f, "too short ({} chars)", chars),
            GenericReason::ForbiddenPhrase(phrase) => write!(f, "forbidden phrase '{}'", phrase),
            GenericReason::SuspiciousPattern(pattern) => {
                write!(f, "suspicious pattern /{}/", pattern)
            }
            GenericReason::LacksSpecifics { score } => {
                write!(f, "specificity score {} below {}", score, MIN_SPECIFICITY_SCORE)
            }
            GenericReason::TooFewSentences { count } => {
                write!(f, "{} developed sentences, need {}", count, MIN_DEVELOPED_SENTENCES)
            }
            GenericReason::GenericOpener => write!(f, "generic first sentence"),
            GenericReason::BelowAcceptedLength { chars } => {
                write!(f, "{} chars, need {}", chars, MIN_ACCEPTED_CHARS)
            }
            GenericReason::GenericFirstSentence => write!(f, "first sentence lacks a concrete opener"),
            GenericReason::GenericVerb => write!(f, "generic verb in first sentence"),
            GenericReason::GenericPattern => write!(f, "generic pattern in text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationVerdict {
    pub is_generic: bool,
    pub reasons: Vec<GenericReason>,
}

impl ValidationVerdict {
    fn pass() -> Self {
        ValidationVerdict::default()
    }

    fn fail(reasons: Vec<GenericReason>) -> Self {
        ValidationVerdict {
            is_generic: true,
            reasons,
        }
    }
}

/// Trimmed `.`/`!`/`?` separated segments, empties dropped.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn is_developed(sentence: &str) -> bool {
    sentence.chars().count() > MIN_SENTENCE_CHARS
}

pub fn developed_sentence_count(text: &str) -> usize {
    sentences(text).filter(|s| is_developed(s)).count()
}

/// Which kinds of concrete detail appear in `text`.
pub fn specificity_signals(text: &str) -> Vec<SpecificitySignal> {
    SPECIFICITY_REGEXES
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(signal, _)| *signal)
        .collect()
}

pub fn specificity_score(text: &str) -> usize {
    specificity_signals(text).len()
}

/// The sentence the opener rule inspects: the first developed one.
pub fn first_developed_sentence(text: &str) -> Option<&str> {
    sentences(text).find(|s| is_developed(s))
}

fn has_generic_opener(sentence: &str) -> bool {
    GENERIC_OPENER_REGEX.is_match(sentence)
        && !SPECIFIC_OPENER_REGEXES.iter().any(|r| r.is_match(sentence))
}

pub fn evaluate(description: &str) -> ValidationVerdict {
    let chars = description.chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return ValidationVerdict::fail(vec![GenericReason::TooShort { chars }]);
    }

    if let Some(phrase) = rules::find_forbidden_phrase(description) {
        return ValidationVerdict::fail(vec![GenericReason::ForbiddenPhrase(phrase)]);
    }

    if let Some(idx) = SUSPICIOUS_REGEXES.iter().position(|r| r.is_match(description)) {
        return ValidationVerdict::fail(vec![GenericReason::SuspiciousPattern(
            SUSPICIOUS_PATTERNS[idx],
        )]);
    }

    let mut reasons = Vec::new();
    let score = specificity_score(description);
    if score < MIN_SPECIFICITY_SCORE {
        reasons.push(GenericReason::LacksSpecifics { score });
    }
    let count = developed_sentence_count(description);
    if count < MIN_DEVELOPED_SENTENCES {
        reasons.push(GenericReason::TooFewSentences { count });
    }
    if !reasons.is_empty() {
        return ValidationVerdict::fail(reasons);
    }

    if let Some(first) = first_developed_sentence(description) {
        if has_generic_opener(first) {
            return ValidationVerdict::fail(vec![GenericReason::GenericOpener]);
        }
    }

    ValidationVerdict::pass()
}

pub fn is_generic(description: &str) -> bool {
    evaluate(description).is_generic
}

/// The bar a model-written description must clear before it is shown: the
/// length floor, every detector layer, and a stricter look at how the text
/// opens.
pub fn evaluate_for_acceptance(description: &str) -> ValidationVerdict {
    let description = description.trim();
    let chars = description.chars().count();
    if chars < MIN_ACCEPTED_CHARS {
        return ValidationVerdict::fail(vec![GenericReason::BelowAcceptedLength { chars }]);
    }

    let verdict = evaluate(description);
    if verdict.is_generic {
        return verdict;
    }

    let first = sentences(description).next().unwrap_or("");
    let generic_start = ACCEPT_GENERIC_START_REGEX.is_match(first);
    let specific_start = ACCEPT_SPECIFIC_START_REGEXES.iter().any(|r| r.is_match(first));
    if generic_start && !specific_start {
        return ValidationVerdict::fail(vec![GenericReason::GenericFirstSentence]);
    }
    if GENERIC_VERB_REGEX.is_match(first) {
        return ValidationVerdict::fail(vec![GenericReason::GenericVerb]);
    }
    if GENERIC_PATTERN_REGEX.is_match(description) {
        return ValidationVerdict::fail(vec![GenericReason::GenericPattern]);
    }

    ValidationVerdict::pass()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::rules::FORBIDDEN_PHRASES;

    const SPECIFIC: &str = "In 2015, 196 parties adopted the Paris Agreement at a summit held in France. \
        The deal asked each government to publish its own plan for cutting emissions. \
        China and the United States both joined the accord before it took effect in 2016. \
        Later reviews in 2021 at Glasgow pushed for faster cuts in coal use.";

    #[test]
    fn test_specific_description_passes() {
        let verdict = evaluate(SPECIFIC);
        assert!(!verdict.is_generic, "{:?}", verdict.reasons);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            evaluate("In 2020, China.").reasons,
            vec![GenericReason::TooShort { chars: 15 }]
        );
    }

    #[test]
    fn test_every_forbidden_phrase_vetoes() {
        for phrase in FORBIDDEN_PHRASES {
            let text = format!("{} ... {} ... {}", SPECIFIC, phrase.to_uppercase(), SPECIFIC);
            assert!(is_generic(&text), "phrase '{}' was not caught", phrase);

            let short = format!("... {} ...", phrase);
            assert!(is_generic(&short));
        }
    }

    #[test]
    fn test_suspicious_pattern() {
        let text = SPECIFIC.replace("Later reviews", "This pledge can  be\ntraced   through treaties, and reviews");
        let verdict = evaluate(&text);
        assert!(matches!(verdict.reasons[0], GenericReason::SuspiciousPattern(_)));
    }

    #[test]
    fn test_specificity_threshold() {
        let base = "In 1990 Japan changed its tax law for small farms. \
            Officials in Japan then spent two decades adjusting rates. \
            Farm groups argued for lower rates on rice fields. \
            Rural towns lost young workers to large cities over time.";
        assert_eq!(
            specificity_signals(base),
            vec![SpecificitySignal::Year, SpecificitySignal::Country]
        );
        assert!(!is_generic(base));

        let without_year = base.replace("In 1990 Japan", "Back then Japan");
        assert_eq!(
            evaluate(&without_year).reasons,
            vec![GenericReason::LacksSpecifics { score: 1 }]
        );

        let without_country = base.replace("Japan", "the state");
        assert!(is_generic(&without_country));
    }

    #[test]
    fn test_requires_four_developed_sentences() {
        let text = "In 1990 Japan changed its tax law for small farms. \
            Officials in Japan then spent two decades adjusting rates. Short one. Tiny.";
        assert_eq!(
            evaluate(text).reasons,
            vec![GenericReason::TooFewSentences { count: 2 }]
        );
    }

    #[test]
    fn test_generic_opener() {
        let text = "Some people care a great deal about farm policy. \
            In 1990 Japan changed its tax law for small farms. \
            Officials in Japan then spent two decades adjusting rates. \
            Rural towns lost young workers to large cities over time.";
        assert_eq!(evaluate(text).reasons, vec![GenericReason::GenericOpener]);

        let rescued = text.replace("Some people care", "The Japanese Diet cared");
        assert!(!is_generic(&rescued));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(evaluate(SPECIFIC), evaluate(SPECIFIC));
    }

    #[test]
    fn test_acceptance_is_stricter() {
        assert!(matches!(
            evaluate_for_acceptance("In 2020, China did things.").reasons[0],
            GenericReason::BelowAcceptedLength { .. }
        ));
        assert!(!evaluate_for_acceptance(SPECIFIC).is_generic);

        let vague_start = format!(
            "It shows how a deal is made. {}",
            SPECIFIC.replace("In 2015, ", "During 2015, ")
        );
        let verdict = evaluate_for_acceptance(&vague_start);
        assert!(verdict.is_generic);

        let pattern = format!("{} It emerged as a model for later deals.", SPECIFIC);
        assert_eq!(
            evaluate_for_acceptance(&pattern).reasons,
            vec![GenericReason::GenericPattern]
        );
    }
}
