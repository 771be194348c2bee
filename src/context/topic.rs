use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Coarse subject of an article, used to steer prompts and pick fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Topic {
    Taiwan,
    Climate,
    ArtificialIntelligence,
    UkraineRussia,
    Politics,
    Economics,
    Health,
    Education,
    Technology,
    Culture,
    InternationalRelations,
    #[default]
    CurrentEvents,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Taiwan => "Taiwan and Cross-Strait Relations",
            Topic::Climate => "Climate Change and Environmental Policy",
            Topic::ArtificialIntelligence => "Artificial Intelligence and Technology",
            Topic::UkraineRussia => "Ukraine-Russia Conflict and International Relations",
            Topic::Politics => "Politics and Governance",
            Topic::Economics => "Economics and Trade",
            Topic::Health => "Health and Medicine",
            Topic::Education => "Education",
            Topic::Technology => "Technology",
            Topic::Culture => "Culture and Society",
            Topic::InternationalRelations => "International Relations",
            Topic::CurrentEvents => "Current Events",
        }
    }

    /// Title used when the model's context is discarded, if the topic has one.
    fn fallback_title(&self) -> Option<&'static str> {
        match self {
            Topic::Climate => Some("Climate Change and Global Environmental Policy"),
            Topic::ArtificialIntelligence | Topic::Technology => {
                Some("Artificial Intelligence and Cultural Transformation")
            }
            Topic::Politics => Some("Political Systems and Cultural Values"),
            Topic::Economics => Some("Global Economics and Cultural Perspectives"),
            Topic::Health => Some("Healthcare Systems Across Cultures"),
            Topic::Education => Some("Education Systems and Cultural Values"),
            Topic::Culture => Some("Cultural Practices and Social Change"),
            Topic::InternationalRelations => Some("International Relations and Cultural Diplomacy"),
            Topic::Taiwan | Topic::UkraineRussia | Topic::CurrentEvents => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, first match wins. Taiwan must stay ahead of the international
/// pattern and Ukraine ahead of politics, since their keywords overlap.
pub const TOPIC_RULES: &[(&str, Topic)] = &[
    (r"taiwan|taipei", Topic::Taiwan),
    (
        r"climate|global warming|emission|carbon|cop[0-9]|paris agreement",
        Topic::Climate,
    ),
    (
        r"artificial intelligence|\bai\b|machine learning|chatgpt|gpt|neural network",
        Topic::ArtificialIntelligence,
    ),
    (r"ukraine|russia|war|conflict|nato", Topic::UkraineRussia),
    (
        r"election|democracy|vote|president|prime minister|government",
        Topic::Politics,
    ),
    (r"economy|economic|market|trade|business|gdp|inflation", Topic::Economics),
    (
        r"health|medical|disease|healthcare|hospital|pandemic",
        Topic::Health,
    ),
    (r"education|school|university|student|learning", Topic::Education),
    (r"technology|digital|computer|internet|cyber", Topic::Technology),
    (r"culture|cultural|tradition|society|social", Topic::Culture),
    (
        r"international|diplomacy|foreign|global|united nations",
        Topic::InternationalRelations,
    ),
];

lazy_static! {
    static ref TOPIC_REGEXES: Vec<(Regex, Topic)> = TOPIC_RULES
        .iter()
        .map(|(pattern, topic)| (Regex::new(pattern).unwrap(), *topic))
        .collect();
    static ref LONG_TITLE_WORD: Regex = Regex::new(r"\b[A-Za-z]{6,}\b").unwrap();
}

const TITLE_STOPWORDS: &[&str] = &[
    "the", "this", "that", "with", "from", "about", "after", "before", "their", "there", "these",
    "those", "which", "where", "while", "would", "could", "should",
];

pub fn classify(title: &str, content: &str) -> Topic {
    let text = format!("{} {}", title, content).to_lowercase();
    TOPIC_REGEXES
        .iter()
        .find(|(regex, _)| regex.is_match(&text))
        .map(|(_, topic)| *topic)
        .unwrap_or_default()
}

/// Title for a fallback context: the topic's own title, else the article's
/// first substantial word, else a neutral heading.
pub fn fallback_title(topic: Topic, article_title: &str) -> String {
    if let Some(title) = topic.fallback_title() {
        return title.to_string();
    }

    LONG_TITLE_WORD
        .find_iter(article_title)
        .map(|m| m.as_str())
        .find(|word| !TITLE_STOPWORDS.contains(&word.to_lowercase().as_str()))
        .map(|word| {
            let mut chars = word.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("{}: Cultural and Historical Context", capitalized)
        })
        .unwrap_or_else(|| "Cultural Background and Context".to_string())
}
