use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::detector::{evaluate, is_generic};
use super::signals::ExtractedSignals;
use super::templates::{
    LevelText, Theme, CAPITOL_RIOT, ENTITY_BODY, FINAL, HUSKERS, TAIWAN, THEMED, TOPIC_TABLE,
    TRUMP, TRUMP_CHINA_TRADE,
};
use super::topic::Topic;
use crate::types::Level;
use crate::TARGET_CONTEXT;

const DEFAULT_KEYWORD: &str = "these events";
const MAX_LISTED_FACTS: usize = 3;

lazy_static! {
    static ref POLITICAL_VIOLENCE: Regex = Regex::new(
        r"january 6\b|capitol (riot|attack|breach)|storm(ed|ing) (of )?the capitol|pipe bombs?\b|\b(dnc|rnc)\b"
    )
    .unwrap();
    static ref THEME_RULES: Vec<(Theme, Regex)> = vec![
        (
            Theme::Crime,
            Regex::new(r"\b(arrest\w*|crimes?|criminal|suspects?|bomb\w*|attack\w*|police|fbi|charged)\b").unwrap(),
        ),
        (
            Theme::Politics,
            Regex::new(r"\b(elections?|president\w*|congress|senate|house of representatives|vot(e|es|ed|ers)|campaign)\b").unwrap(),
        ),
        (
            Theme::International,
            Regex::new(r"\b(international|diplomacy|diplomatic|treaty|agreements?|sanctions?|united nations)\b").unwrap(),
        ),
        (
            Theme::Economy,
            Regex::new(r"\b(economy|economic|trade|markets?|tariffs?|inflation)\b").unwrap(),
        ),
        (
            Theme::Technology,
            Regex::new(r"\b(technology|ai|digital|computers?|software|internet)\b").unwrap(),
        ),
        (
            Theme::Health,
            Regex::new(r"\b(health|medical|disease|pandemic|hospitals?|vaccines?)\b").unwrap(),
        ),
    ];
}

/// The concrete fact a composed paragraph opens with, in preference order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Opening {
    Date(String),
    Year(String),
    Country(String),
    Person(String),
    Organization(String),
    Event(String),
}

impl Opening {
    fn from_signals(signals: &ExtractedSignals) -> Option<Self> {
        if let Some(date) = &signals.specific_date {
            return Some(Opening::Date(date.clone()));
        }
        if let Some(year) = signals.most_recent_year() {
            return Some(Opening::Year(year.to_string()));
        }
        if let Some(country) = signals.first_country() {
            return Some(Opening::Country(country.to_string()));
        }
        if let Some(person) = signals.first_person() {
            return Some(Opening::Person(capitalize(person)));
        }
        if let Some(org) = signals.first_organization() {
            return Some(Opening::Organization(capitalize(org)));
        }
        signals.first_event().map(|event| Opening::Event(capitalize(event)))
    }

    /// "On January 6, 2021" / "In 2021" / "In the United States"; `None` for named actors.
    fn when_or_where(&self) -> Option<String> {
        match self {
            Opening::Date(date) => Some(format!("On {}", date)),
            Opening::Year(year) => Some(format!("In {}", year)),
            Opening::Country(country) => Some(format!("In {}", place(country))),
            _ => None,
        }
    }

    fn value(&self) -> &str {
        match self {
            Opening::Date(v)
            | Opening::Year(v)
            | Opening::Country(v)
            | Opening::Person(v)
            | Opening::Organization(v)
            | Opening::Event(v) => v,
        }
    }
}

/// Deterministic background paragraph for an article whose model-written
/// context is unavailable or was rejected.
///
/// The result always passes `evaluate`: text that trips a rule is rebuilt
/// around a neutral keyword, and failing that the topic table or final
/// template is used.
pub fn fallback_description(
    topic: Topic,
    level: Level,
    title: &str,
    content: &str,
    signals: &ExtractedSignals,
) -> String {
    let keyword = signals.main_keyword.as_deref().unwrap_or(DEFAULT_KEYWORD);
    let description = select_description(topic, level, title, content, signals, keyword);
    let verdict = evaluate(&description);
    if !verdict.is_generic {
        return description;
    }

    let reasons: Vec<String> = verdict.reasons.iter().map(|r| r.to_string()).collect();
    warn!(
        target: TARGET_CONTEXT,
        "Fallback text for '{}' failed validation ({}), using a neutral keyword",
        title,
        reasons.join("; ")
    );
    if keyword != DEFAULT_KEYWORD {
        let neutral = select_description(topic, level, title, content, signals, DEFAULT_KEYWORD);
        if !is_generic(&neutral) {
            return neutral;
        }
    }

    topic_text(topic)
        .map(|texts| texts.pick(level).to_string())
        .unwrap_or_else(|| fill(FINAL.pick(level), "", DEFAULT_KEYWORD))
}

fn select_description(
    topic: Topic,
    level: Level,
    title: &str,
    content: &str,
    signals: &ExtractedSignals,
    keyword: &str,
) -> String {
    let text = format!("{} {}", title, content).to_lowercase();

    if text.contains("husker") || text.contains("nebraska") {
        debug!(target: TARGET_CONTEXT, "Fallback branch: college sports institution");
        return HUSKERS.pick(level).to_string();
    }

    if POLITICAL_VIOLENCE.is_match(&text) {
        debug!(target: TARGET_CONTEXT, "Fallback branch: January 6 and related events");
        return CAPITOL_RIOT.pick(level).to_string();
    }

    let mentions_trump = text.contains("trump")
        || signals.people.iter().any(|p| p.eq_ignore_ascii_case("trump"));
    if mentions_trump {
        let china_trade =
            text.contains("china") && (text.contains("trade") || text.contains("tariff"));
        debug!(target: TARGET_CONTEXT, "Fallback branch: named person (china trade: {})", china_trade);
        let texts = if china_trade { TRUMP_CHINA_TRADE } else { TRUMP };
        return texts.pick(level).to_string();
    }

    if topic == Topic::Taiwan {
        debug!(target: TARGET_CONTEXT, "Fallback branch: Taiwan");
        return TAIWAN.pick(level).to_string();
    }

    if signals.has_concrete_fact() {
        if let Some(when) = when_phrase(signals) {
            if let Some(texts) = detect_theme(&text).and_then(themed_text) {
                debug!(target: TARGET_CONTEXT, "Fallback branch: themed entity composition");
                return fill(texts.pick(level), &when, keyword);
            }
        }
        if let Some(opening) = Opening::from_signals(signals) {
            debug!(target: TARGET_CONTEXT, "Fallback branch: entity composition ({:?})", opening);
            return compose_from_entities(level, &opening, signals, keyword);
        }
    }

    if let Some(texts) = topic_text(topic) {
        debug!(target: TARGET_CONTEXT, "Fallback branch: topic table ({})", topic);
        return texts.pick(level).to_string();
    }

    debug!(target: TARGET_CONTEXT, "Fallback branch: final template");
    fill(FINAL.pick(level), "", keyword)
}

fn when_phrase(signals: &ExtractedSignals) -> Option<String> {
    match (&signals.specific_date, signals.most_recent_year()) {
        (Some(date), _) => Some(format!("On {}", date)),
        (None, Some(year)) => Some(format!("In {}", year)),
        (None, None) => None,
    }
}

fn detect_theme(text: &str) -> Option<Theme> {
    THEME_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(theme, _)| *theme)
}

fn themed_text(theme: Theme) -> Option<&'static LevelText> {
    THEMED.iter().find(|(t, _)| *t == theme).map(|(_, texts)| texts)
}

fn topic_text(topic: Topic) -> Option<&'static LevelText> {
    TOPIC_TABLE
        .iter()
        .find(|(topics, _)| topics.contains(&topic))
        .map(|(_, texts)| texts)
}

fn fill(template: &str, when: &str, keyword: &str) -> String {
    template.replace("{when}", when).replace("{keyword}", keyword)
}

fn compose_from_entities(
    level: Level,
    opening: &Opening,
    signals: &ExtractedSignals,
    keyword: &str,
) -> String {
    let keyword = if keyword.eq_ignore_ascii_case(opening.value()) {
        DEFAULT_KEYWORD
    } else {
        keyword
    };
    let also_in = match opening {
        Opening::Date(_) | Opening::Year(_) => signals
            .first_country()
            .map(|c| format!(" in {}", place(c)))
            .unwrap_or_default(),
        _ => String::new(),
    };

    let first = match (level, opening.when_or_where()) {
        (Level::Beginner, Some(when)) => format!("{}, {} made the news{}.", when, keyword, also_in),
        (Level::Beginner, None) => match opening {
            Opening::Person(p) => format!("{} is a key name in the story of {}.", p, keyword),
            Opening::Organization(o) => format!("The {} is a key group in the story of {}.", o, keyword),
            other => format!("The {} is at the center of the story of {}.", other.value(), keyword),
        },
        (Level::Intermediate, Some(when)) => format!("{}, {} made headlines{}.", when, keyword, also_in),
        (Level::Intermediate, None) => match opening {
            Opening::Person(p) => {
                format!("{} is one of the central figures in the story of {}.", p, keyword)
            }
            Opening::Organization(o) => {
                format!("The {} plays a central part in the story of {}.", o, keyword)
            }
            other => format!("The {} sits at the center of the story of {}.", other.value(), keyword),
        },
        (Level::Advanced, Some(when)) => format!(
            "{}, {} moved to the center of news coverage{}, and the report anchors its account in named people, places and dates rather than in broad commentary.",
            when, keyword, also_in
        ),
        (Level::Advanced, None) => {
            let subject = match opening {
                Opening::Person(p) => p.clone(),
                other => format!("The {}", other.value()),
            };
            format!(
                "{} stands at the center of the reporting on {}, and the article anchors its account in named people, places and dates rather than in broad commentary.",
                subject, keyword
            )
        }
    };

    let mut parts = vec![first, ENTITY_BODY.pick(level).to_string()];

    let facts = listed_facts(opening, signals);
    match level {
        Level::Beginner => {
            if let Some(list) = &facts {
                parts.push(format!("The article also names {}.", list));
            }
            if let Some(number) = signals.first_number() {
                parts.push(format!("The report also gives the figure {}.", number));
            }
        }
        Level::Intermediate => {
            if let Some(list) = &facts {
                parts.push(format!("The article also mentions {}.", list));
            }
            if let Some(number) = signals.first_number() {
                parts.push(format!(
                    "Figures such as {} usually appear early because editors treat them as hard evidence.",
                    number
                ));
            }
        }
        Level::Advanced => {
            if let Some(number) = signals.first_number() {
                parts.push(format!(
                    "Figures such as {} deserve particular attention, because editors place quantitative evidence early when it supports the central claim of a report.",
                    number
                ));
            }
            let tracked = facts.unwrap_or_else(|| "the names, dates and figures".to_string());
            parts.push(format!(
                "Tracking references to {} across the article makes it possible to reconstruct the sequence of events and to judge which claims rest on documented evidence.",
                tracked
            ));
        }
    }

    parts.join(" ")
}

/// Up to three named facts other than the one the paragraph opens with.
fn listed_facts(opening: &Opening, signals: &ExtractedSignals) -> Option<String> {
    let opener = opening.value().to_lowercase();
    let mut seen = vec![opener];
    let mut facts = Vec::new();

    let candidates = signals
        .countries
        .iter()
        .map(|c| place(c))
        .chain(signals.people.iter().map(|p| capitalize(p)))
        .chain(signals.organizations.iter().map(|o| format!("the {}", capitalize(o))))
        .chain(signals.events.iter().map(|e| format!("the {}", capitalize(e))));

    for fact in candidates {
        let key = fact.trim_start_matches("the ").to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        facts.push(fact);
        if facts.len() == MAX_LISTED_FACTS {
            break;
        }
    }

    join_list(&facts)
}

fn join_list(items: &[String]) -> Option<String> {
    match items {
        [] => None,
        [one] => Some(one.clone()),
        [init @ .., last] => Some(format!("{} and {}", init.join(", "), last)),
    }
}

/// Countries that read naturally with an article ("the United States").
fn place(country: &str) -> String {
    match country {
        "United States" | "US" | "USA" | "UK" => format!("the {}", country),
        _ => country.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
