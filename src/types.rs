use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reader proficiency. Beginner is A1-A2, intermediate B1-B2, advanced C1-C2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "beginner"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "advanced" => Level::Advanced,
            _ => Level::Intermediate,
        }
    }
}

/// A news article as handed to the generators. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub level: Level,
}

impl Article {
    pub fn new(title: &str, content: &str, level: Level) -> Self {
        Article {
            title: title.to_string(),
            content: content.to_string(),
            level,
        }
    }

    /// Rejects the inputs the boundary layer must answer with a 400.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("Title is required and must be a non-empty string");
        }
        if self.content.trim().is_empty() {
            bail!("Content is required and must be a non-empty string");
        }
        Ok(())
    }
}

/// Inbound body for the summary, question and cultural-context endpoints.
pub type ArticleRequest = Article;

/// Inbound body for quiz generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub level: Level,
}

impl QuizRequest {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("Title is required and must be a non-empty string");
        }
        if self.content.trim().is_empty() {
            bail!("Content is required and must be a non-empty string");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalContext {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub word: String,
}

impl QuizItem {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSection {
    pub score: u8,
    pub comments: Vec<String>,
}

impl FeedbackSection {
    pub fn new(score: u8, comment: &str) -> Self {
        FeedbackSection {
            score,
            comments: vec![comment.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingFeedback {
    pub grammar: FeedbackSection,
    pub vocabulary: FeedbackSection,
    pub structure: FeedbackSection,
    pub suggestions: Vec<String>,
    pub improved: String,
}

/// What the learner wrote plus the optional article and prompt it answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub text: String,
    #[serde(default)]
    pub article_title: Option<String>,
    #[serde(default)]
    pub article_content: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub level: Level,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            bail!("Text is required and must be a non-empty string");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSummary {
    pub summary: String,
    pub keywords: Vec<String>,
    pub grammar_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rephrased {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
}
