use crate::prompt::common::{level_language, JSON_ONLY};
use crate::types::Level;

/// Prompt asking for the same text at three proficiency levels.
pub fn rephrase_prompt(text: &str) -> String {
    format!(
        r#"Rewrite this text in three DIFFERENT English proficiency levels. Each level must be DISTINCTLY different in vocabulary, sentence structure, and complexity.

Original Text:
----------
{text}
----------

1. BEGINNER (A1-A2):
{beginner}
   Example: "The government implemented a comprehensive strategy" → "The government made a plan"

2. INTERMEDIATE (B1-B2):
{intermediate}

3. ADVANCED (C1-C2):
{advanced}
   Example: "The government made a plan" → "The government substantiated a comprehensive strategic framework"

Keep the same core meaning across all three levels. Do NOT copy the same text for every level.

Return as JSON with this exact structure:
{{
  "beginner": "Simple version with basic vocabulary and short sentences",
  "intermediate": "Intermediate version with varied vocabulary and medium sentences",
  "advanced": "Sophisticated version with advanced vocabulary and complex sentences"
}}
"#,
        text = text,
        beginner = level_language(Level::Beginner),
        intermediate = level_language(Level::Intermediate),
        advanced = level_language(Level::Advanced),
    )
}

pub fn rephrase_system() -> String {
    format!(
        "You are an English language teacher showing students how one text reads at different proficiency levels. You MUST create DISTINCTLY different versions for each level. {}",
        JSON_ONLY
    )
}
