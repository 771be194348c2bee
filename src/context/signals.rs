//! Concrete facts pulled out of an article: years, places, institutions,
//! people, events and figures.
//!
//! Every value is a substring of the article text (up to case), so anything
//! built from these signals stays faithful to the source.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use super::rules::find_forbidden_phrase;

pub const MAX_KEY_ENTITIES: usize = 15;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    // Acronyms only count in upper case, otherwise "us" in running text is a country.
    static ref COUNTRY: Regex = Regex::new(
        r"\b(?:(?i:China|United States|Russia|Japan|Korea|India|Germany|France|Britain|Taiwan|Ukraine|Brazil|Canada|Australia|Italy|Spain|Nebraska|America)|USA|US|UK)\b"
    )
    .unwrap();
    static ref ORGANIZATION: Regex = Regex::new(
        r"(?i)\b(?:University|College|UN|NATO|EU|IPCC|UNESCO|Summit|Agreement|Act|Congress|Parliament|Government|Administration|Department|Ministry|FBI|DNC|RNC|White House)\b"
    )
    .unwrap();
    static ref PERSON: Regex = Regex::new(
        r"(?i)\b(?:Trump|Biden|Xi|Putin|Obama|Clinton|Bush|Reagan|Thatcher|Merkel|Macron|Modi|Abe)\b"
    )
    .unwrap();
    static ref EVENT: Regex = Regex::new(
        r"(?i)\b(?:Civil War|Trade War|Cold War|War|Summit|Agreement|Act|Conference|Revolution|Treaty|Convention|Election|Pandemic|Crisis|Recession|Depression|Riot|Attack|Arrest)\b"
    )
    .unwrap();
    static ref NUMBER: Regex = Regex::new(
        r"(?i)\b\d{1,3}(?:,\d{3})*(?:\.\d+)?\s*(?:%|(?:percent|billion|million|thousand|dollars?|people|countries)\b)"
    )
    .unwrap();
    static ref SPECIFIC_DATE: Regex = Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b"
    )
    .unwrap();
    static ref PROPER_NOUN: Regex = Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap();
    static ref CALENDAR_WORD: Regex = Regex::new(
        r"(?i)^(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday|January|February|March|April|May|June|July|August|September|October|November|December)$"
    )
    .unwrap();
    static ref TITLE_WORD: Regex = Regex::new(r"\b[A-Z][a-z]+\b").unwrap();
}

const COMMON_CAPITALIZED: &[&str] = &[
    "The", "This", "That", "These", "Those", "They", "We", "You", "He", "She", "It", "A", "An",
    "In", "On", "At", "For", "To", "Of", "And", "Or", "But", "When", "What", "After", "Before",
    "While", "With", "From",
];

const WEAK_TITLE_WORDS: &[&str] = &["The", "This", "That", "With", "From", "About", "News"];

/// Everything the context pipeline knows about an article without asking a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSignals {
    /// First-seen order, deduplicated.
    pub years: Vec<String>,
    pub countries: Vec<String>,
    pub organizations: Vec<String>,
    pub people: Vec<String>,
    pub events: Vec<String>,
    pub numbers: Vec<String>,
    pub specific_date: Option<String>,
    pub key_entities: Vec<String>,
    pub main_keyword: Option<String>,
}

impl ExtractedSignals {
    /// Latest year mentioned. Years are four digits, so string order is numeric order.
    pub fn most_recent_year(&self) -> Option<&str> {
        self.years.iter().max().map(String::as_str)
    }

    pub fn first_country(&self) -> Option<&str> {
        self.countries.first().map(String::as_str)
    }

    pub fn first_organization(&self) -> Option<&str> {
        self.organizations.first().map(String::as_str)
    }

    pub fn first_person(&self) -> Option<&str> {
        self.people.first().map(String::as_str)
    }

    pub fn first_event(&self) -> Option<&str> {
        self.events.first().map(String::as_str)
    }

    pub fn first_number(&self) -> Option<&str> {
        self.numbers.first().map(String::as_str)
    }

    /// True when at least one concrete fact is available to open a paragraph with.
    pub fn has_concrete_fact(&self) -> bool {
        self.specific_date.is_some()
            || !self.years.is_empty()
            || !self.countries.is_empty()
            || !self.organizations.is_empty()
            || !self.people.is_empty()
            || !self.events.is_empty()
    }

    /// One-line digest embedded in the cultural-context prompt.
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.years.is_empty() {
            parts.push(format!("Years mentioned: {}", join_first(&self.years, 5)));
        }
        if !self.countries.is_empty() {
            parts.push(format!("Countries mentioned: {}", join_first(&self.countries, 5)));
        }
        let named: Vec<String> = self
            .organizations
            .iter()
            .chain(self.people.iter())
            .chain(self.events.iter())
            .cloned()
            .collect();
        if !named.is_empty() {
            parts.push(format!("Organizations, people and events: {}", join_first(&named, 5)));
        }
        if let Some(date) = &self.specific_date {
            parts.push(format!("Specific date: {}", date));
        }
        if !self.numbers.is_empty() {
            parts.push(format!("Key numbers/statistics: {}", join_first(&self.numbers, 3)));
        }

        if parts.is_empty() {
            "No specific dates, places or figures found in the article".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

fn join_first(values: &[String], n: usize) -> String {
    values.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

/// Runs every extraction pass over `title` and `content`.
pub fn extract(title: &str, content: &str) -> ExtractedSignals {
    let text = format!("{} {}", title, content);

    ExtractedSignals {
        years: dedup_exact(YEAR.find_iter(&text).map(|m| m.as_str().to_string())),
        countries: dedup_exact(COUNTRY.find_iter(&text).map(|m| normalize_country(m.as_str()))),
        organizations: dedup_ignore_case(ORGANIZATION.find_iter(&text).map(|m| m.as_str().to_string())),
        people: dedup_ignore_case(PERSON.find_iter(&text).map(|m| m.as_str().to_string())),
        events: dedup_ignore_case(EVENT.find_iter(&text).map(|m| m.as_str().to_string())),
        numbers: dedup_exact(NUMBER.find_iter(&text).map(|m| m.as_str().to_string())),
        specific_date: SPECIFIC_DATE.find(&text).map(|m| m.as_str().to_string()),
        key_entities: key_entities(&text),
        main_keyword: main_keyword(title),
    }
}

/// "united states" becomes "United States"; upper-case acronyms stay as written.
fn normalize_country(raw: &str) -> String {
    if raw.len() <= 3 && raw.chars().all(|c| c.is_ascii_uppercase()) {
        return raw.to_string();
    }
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_entities(text: &str) -> Vec<String> {
    let candidates = PROPER_NOUN.find_iter(text).map(|m| m.as_str()).filter(|m| {
        !COMMON_CAPITALIZED.contains(m) && m.chars().count() > 3 && !CALENDAR_WORD.is_match(m)
    });

    let mut entities = dedup_ignore_case(candidates.map(str::to_string));
    entities.truncate(MAX_KEY_ENTITIES);
    entities
}

fn main_keyword(title: &str) -> Option<String> {
    let words: Vec<&str> = TITLE_WORD
        .find_iter(title)
        .map(|m| m.as_str())
        .filter(|w| find_forbidden_phrase(w).is_none())
        .collect();
    words
        .iter()
        .find(|w| w.chars().count() > 4 && !WEAK_TITLE_WORDS.contains(*w))
        .or_else(|| words.first())
        .map(|w| w.to_string())
}

fn dedup_exact(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

fn dedup_ignore_case(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.to_lowercase())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_keep_first_seen_order() {
        let signals = extract("Vote", "In 2016 and again in 2020, then 2016 once more. Not 3016.");
        assert_eq!(signals.years, vec!["2016", "2020"]);
        assert_eq!(signals.most_recent_year(), Some("2020"));
    }

    #[test]
    fn test_countries_are_normalized() {
        let signals = extract("Trade", "CHINA and the united states met. The UK joined; tell us more.");
        assert_eq!(signals.countries, vec!["China", "United States", "UK"]);
    }

    #[test]
    fn test_named_signals() {
        let signals = extract(
            "Biden at the Summit",
            "On January 6, 2021, the Cold War history of NATO came up. About 3,000 people and 40% of voters.",
        );
        assert_eq!(signals.people, vec!["Biden"]);
        assert_eq!(signals.specific_date.as_deref(), Some("January 6, 2021"));
        assert!(signals.organizations.contains(&"NATO".to_string()));
        assert!(signals.events.contains(&"Cold War".to_string()));
        assert!(signals.events.contains(&"Summit".to_string()));
        assert_eq!(signals.numbers, vec!["3,000 people", "40%"]);
    }

    #[test]
    fn test_key_entities_filter_and_cap() {
        let signals = extract(
            "Game day",
            "Huskers played. Nebraska Cornhuskers won. huskers fans cheered on Monday. It rained.",
        );
        assert_eq!(signals.key_entities, vec!["Game", "Huskers", "Nebraska Cornhuskers"]);

        let names: Vec<String> = (0..40u8)
            .map(|i| format!("Kappa{}{}", (b'a' + i / 26) as char, (b'a' + i % 26) as char))
            .collect();
        let signals = extract("x", &names.join(". "));
        assert_eq!(signals.key_entities.len(), MAX_KEY_ENTITIES);
        assert_eq!(signals.key_entities[0], "Kappaaa");
    }

    #[test]
    fn test_main_keyword() {
        assert_eq!(extract("Huskers Face Nebraska", "").main_keyword.as_deref(), Some("Huskers"));
        assert_eq!(extract("The News About Taxes", "").main_keyword.as_deref(), Some("Taxes"));
        assert_eq!(extract("The War", "").main_keyword.as_deref(), Some("The"));
        assert_eq!(extract("lower case only", "").main_keyword, None);
        assert_eq!(
            extract("Developments Worry Farmers", "").main_keyword.as_deref(),
            Some("Worry")
        );
    }

    #[test]
    fn test_signals_come_from_text() {
        let title = "Taiwan election";
        let content = "Voters in Taiwan went to the polls in 2024 with 70% turnout.";
        let signals = extract(title, content);
        let haystack = format!("{} {}", title, content).to_lowercase();
        for value in signals
            .years
            .iter()
            .chain(&signals.countries)
            .chain(&signals.events)
            .chain(&signals.numbers)
        {
            assert!(haystack.contains(&value.to_lowercase()), "{} not in text", value);
        }
    }

    #[test]
    fn test_summary_line() {
        let signals = extract("Taiwan vote", "In 2024 Taiwan voted.");
        assert_eq!(signals.summary_line(), "Years mentioned: 2024 | Countries mentioned: Taiwan");
        assert!(extract("a", "b").summary_line().starts_with("No specific"));
    }
}
