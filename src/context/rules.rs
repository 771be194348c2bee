//! Rule tables for judging whether a cultural-context description is too
//! vague to show a learner.
//!
//! The phrase list grew by patching against concrete bad replies. Treat it as
//! data to extend, not as a principled vocabulary.

use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_DESCRIPTION_CHARS: usize = 50;
pub const MIN_SPECIFICITY_SCORE: usize = 2;
pub const MIN_DEVELOPED_SENTENCES: usize = 4;
/// A sentence counts as developed when it has more than this many characters.
pub const MIN_SENTENCE_CHARS: usize = 20;
/// LLM descriptions shorter than this are never accepted.
pub const MIN_ACCEPTED_CHARS: usize = 250;

/// Case-insensitive substrings that veto a description outright. Lower case.
pub const FORBIDDEN_PHRASES: &[&str] = &[
    // Stock openers
    "this topic is important",
    "different people have different views",
    "this is a complex issue",
    "understanding this helps",
    "this topic reflects",
    "many cultures",
    "various perspectives",
    "different countries",
    // Boilerplate sentences seen verbatim in replies
    "this topic has important cultural and historical background",
    "understanding the context helps interpret news",
    "different cultures and historical experiences shape",
    "helps interpret news about this subject",
    "shape how people view this topic",
    "understanding these differences helps",
    "different regions have different perspectives",
    "based on their history and culture",
    "reflects cultural and historical differences",
    "understanding these differences helps interpret",
    // Fragments of the above
    "cultural and historical differences",
    "understanding these differences",
    "different regions have",
    "different perspectives based",
    "helps interpret news",
    "based on their",
    "history and culture",
    "important cultural and historical background",
    "understanding the context helps",
    "different cultures and historical experiences",
    // Filler
    "this topic is",
    "important in",
    "many countries",
    "different places",
    "various countries",
    "around the world",
    "global perspective",
    "cultural awareness",
    "societal impact",
    "reflects significant",
    "cultural and historical",
    "developments",
    "understanding the",
    "cultural background",
    "helps understand",
    "this subject",
    "different ways",
    "of thinking",
    // "Significant phenomenon" family
    "represents a significant cultural and historical phenomenon",
    "can be traced through specific historical events",
    "can be traced through",
    "specific historical events and cultural shifts",
    "different regions have developed distinct approaches",
    "based on their unique historical experiences",
    "economic conditions, and cultural values",
    "understanding these specific historical and cultural contexts",
    "is essential for interpreting current developments",
    "related to this topic",
    "represents a significant",
    "cultural and historical phenomenon",
    "the development of this topic",
    "distinct approaches based",
    "unique historical experiences",
    "essential for interpreting",
    "current developments related",
    // "Particular historical events" family
    "has specific historical and cultural significance",
    "evolved through particular historical events",
    "particular historical events and cultural developments",
    "understanding the specific historical context",
    "helps interpret current news about this topic",
    "in china, this topic",
    "this topic has evolved",
    "through particular historical",
    "cultural developments",
    "understanding the specific",
    "historical context and cultural factors",
    // "Emerged as a significant issue" family
    "emerged as a significant issue",
    "when specific historical events",
    "cultural developments shaped",
    "shaped its current form",
    "how this topic is understood",
    "the historical background of this issue",
    "why current developments matter",
    "how different perspectives have developed",
    "understanding these specific historical and cultural factors",
    "is essential for interpreting news about",
    "news about news",
    "news about this topic",
    "federal authorities made",
    "in connection with",
    "news emerged",
];

/// Shapes that survive small rewordings of the forbidden phrases.
pub const SUSPICIOUS_PATTERNS: &[&str] = &[
    r"(?i)represents\s+a\s+significant\s+cultural",
    r"(?i)can\s+be\s+traced\s+through",
    r"(?i)different\s+regions\s+have\s+developed",
    r"(?i)based\s+on\s+their\s+unique\s+historical",
    r"(?i)understanding\s+these\s+specific\s+historical",
    r"(?i)essential\s+for\s+interpreting\s+current",
    r"(?i)the\s+development\s+of\s+this\s+topic",
];

/// Kinds of concrete detail that make a description checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecificitySignal {
    Year,
    Percentage,
    Country,
    Organization,
    Event,
    Person,
    Quantity,
}

pub const SPECIFICITY_RULES: &[(SpecificitySignal, &str)] = &[
    (SpecificitySignal::Year, r"\b(19|20)\d{2}\b"),
    (SpecificitySignal::Percentage, r"\b\d+%"),
    (
        SpecificitySignal::Country,
        r"(?i)\b(China|United States|USA|Russia|Japan|Korea|India|Germany|France|Britain|Taiwan|Ukraine|Nebraska|America|American|Europe|European|Asia|Asian)\b",
    ),
    (
        SpecificitySignal::Organization,
        r"(?i)\b(University|College|UN|NATO|EU|IPCC|UNESCO|Summit|Agreement|Act|Congress|Parliament|Government|Administration)\b",
    ),
    (
        SpecificitySignal::Event,
        r"(?i)\b(War|Summit|Agreement|Act|Conference|Revolution|Civil War|Treaty|Convention|Election)\b",
    ),
    (
        SpecificitySignal::Person,
        r"(?i)\b(Trump|Biden|Xi|Putin|Nebraska|Huskers|Paris|Beijing|Washington|Taipei)\b",
    ),
    (
        SpecificitySignal::Quantity,
        r"(?i)\b\d+\s+(million|billion|thousand|percent|people|countries|years|century)\b",
    ),
];

/// First-sentence openers that usually lead into a generality.
pub const GENERIC_OPENER: &str = r"(?i)^(this|the|it|understanding|different|various|many|some)\b";

/// Any of these rescues a first sentence that starts with a generic opener.
pub const SPECIFIC_OPENERS: &[&str] = &[
    r"^(?i:the|in|during|since|after|before|when|where)\s+[A-Z]",
    r"^(?i:a|an)\s+[A-Z][a-z]+\s+(?i:was|were|is|are|became|occurred|happened|established|created|founded)\b",
    r"\b(19|20)\d{2}\b",
    r"(?i)\b(Trump|Biden|China|United States|Nebraska|University)",
];

/// Stricter opener rules applied to LLM replies before they are accepted.
pub const ACCEPT_GENERIC_START: &str = r"(?i)^(this|the|it|understanding|different|various|many|some|in\s+china,\s+this|this\s+topic|trump's\s+in|federal\s+authorities|news\s+emerged)";

pub const ACCEPT_SPECIFIC_STARTS: &[&str] = &[
    r"(?i)^(in|during|since|after|before|when|where)\s+\d{4}",
    r"^(?i:in|during|since|after|before|when|where)\s+[A-Z][a-z]+",
    r"\b(19|20)\d{2}\b",
    r"(?i)\b(Trump|Biden|Xi|China|United States|Nebraska|University|College|NATO|UN|Paris|Taiwan|Huskers|FBI|DNC|RNC|Capitol|January|2021|2020|2019)\b",
    r"(?i)^(the|a|an)\s+[A-Z][a-z]+\s+(was|were|is|are|became|occurred|happened|established|created|founded)",
];

pub const GENERIC_VERB_IN_FIRST_SENTENCE: &str =
    r"(?i)(emerged|shaped|understanding|helps|explains|shows|reflects)\s+(as|when|how|why|that|this)";

pub const GENERIC_PATTERN_ANYWHERE: &str = r"(?i)(emerged as a|shaped its|understanding these|helps explain|why current developments|how different perspectives)";

lazy_static! {
    pub static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();
    pub static ref SUSPICIOUS_REGEXES: Vec<Regex> = compile_all(SUSPICIOUS_PATTERNS);
    pub static ref SPECIFICITY_REGEXES: Vec<(SpecificitySignal, Regex)> = SPECIFICITY_RULES
        .iter()
        .map(|(signal, pattern)| (*signal, Regex::new(pattern).unwrap()))
        .collect();
    pub static ref GENERIC_OPENER_REGEX: Regex = Regex::new(GENERIC_OPENER).unwrap();
    pub static ref SPECIFIC_OPENER_REGEXES: Vec<Regex> = compile_all(SPECIFIC_OPENERS);
    pub static ref ACCEPT_GENERIC_START_REGEX: Regex = Regex::new(ACCEPT_GENERIC_START).unwrap();
    pub static ref ACCEPT_SPECIFIC_START_REGEXES: Vec<Regex> = compile_all(ACCEPT_SPECIFIC_STARTS);
    pub static ref GENERIC_VERB_REGEX: Regex = Regex::new(GENERIC_VERB_IN_FIRST_SENTENCE).unwrap();
    pub static ref GENERIC_PATTERN_REGEX: Regex = Regex::new(GENERIC_PATTERN_ANYWHERE).unwrap();
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// First forbidden phrase contained in `text`, if any.
pub fn find_forbidden_phrase(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    FORBIDDEN_PHRASES.iter().copied().find(|phrase| lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(SUSPICIOUS_REGEXES.len(), SUSPICIOUS_PATTERNS.len());
        assert_eq!(SPECIFICITY_REGEXES.len(), SPECIFICITY_RULES.len());
        assert_eq!(SPECIFIC_OPENER_REGEXES.len(), SPECIFIC_OPENERS.len());
        assert_eq!(ACCEPT_SPECIFIC_START_REGEXES.len(), ACCEPT_SPECIFIC_STARTS.len());
        assert!(GENERIC_OPENER_REGEX.is_match("This is"));
        assert!(ACCEPT_GENERIC_START_REGEX.is_match("news emerged today"));
    }

    #[test]
    fn test_forbidden_phrases_are_lower_case() {
        for phrase in FORBIDDEN_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase must be lower case");
        }
    }

    #[test]
    fn test_find_forbidden_phrase_ignores_case() {
        assert_eq!(
            find_forbidden_phrase("People AROUND THE WORLD watch it."),
            Some("around the world")
        );
        assert_eq!(find_forbidden_phrase("In 1890 Nebraska fielded a team."), None);
    }

    #[test]
    fn test_generic_opener_needs_whole_word() {
        assert!(GENERIC_OPENER_REGEX.is_match("It was"));
        assert!(!GENERIC_OPENER_REGEX.is_match("Italy signed"));
        assert!(!GENERIC_OPENER_REGEX.is_match("Theodore Roosevelt"));
    }
}
