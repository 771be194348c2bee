use chrono::Local;

use crate::types::Level;

// Common text blocks for all prompts
pub const DONT_TELL_ME: &str = r#"
Important instructions for your responses:

1. Do not narrate or describe your actions.
2. Do not summarize or restate the instructions I've given you.
3. Do not preface your responses with phrases like "Here's a summary..." or "I will now..."
4. Do not acknowledge or confirm that you understand these instructions.
5. Avoid phrases like "As an AI language model..." or similar self-referential statements.

Your responses should appear as if they're coming from an experienced English teacher who naturally follows these guidelines without needing to mention them.
"#;

pub const JSON_ONLY: &str = "Return ONLY valid JSON, no markdown, no explanations, no additional text.";

/// Utility function to get the current date in a human-readable format
pub fn current_date() -> String {
    let today = Local::now();
    format!(
        "{} {}, {}",
        today.format("%B"),
        today.format("%-d"),
        today.format("%Y")
    )
}

/// CEFR band heading used at the top of level-specific instructions.
pub fn level_band(level: Level) -> &'static str {
    match level {
        Level::Beginner => "BEGINNER LEVEL (A1-A2)",
        Level::Intermediate => "INTERMEDIATE LEVEL (B1-B2)",
        Level::Advanced => "ADVANCED LEVEL (C1-C2)",
    }
}

/// Shared sentence-shape guidance for learner-facing text.
pub fn level_language(level: Level) -> &'static str {
    match level {
        Level::Beginner => {
            r#"- Use ONLY simple, everyday vocabulary (e.g., "important", "people", "help", "change")
- Keep sentences short (10-15 words)
- Use basic grammar: present tense, simple past tense, basic questions"#
        }
        Level::Intermediate => {
            r#"- Use varied vocabulary including SOME academic terms (e.g., "significant", "strategy", "impact", "develop")
- Use medium-length sentences (15-25 words)
- Include SOME complex grammar structures (present perfect, passive voice, conditionals)
- Use connecting words: "however", "therefore", "furthermore", "although""#
        }
        Level::Advanced => {
            r#"- Use sophisticated, academic, and nuanced vocabulary (e.g., "substantiate", "paradigm", "facilitate", "comprehensive")
- Use complex, varied sentence structures (20-35 words)
- Include advanced grammar patterns (subjunctive, inverted conditionals, cleft sentences)
- Use sophisticated connecting words: "furthermore", "consequently", "notwithstanding", "albeit""#
        }
    }
}

/// Role line passed as the system instruction for JSON-producing prompts.
pub fn json_teacher_system(role: &str, level: Level) -> String {
    format!(
        "You are an English language teacher {} for {}-level learners. {}",
        role, level, JSON_ONLY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_date_has_year() {
        let date = current_date();
        assert!(date.contains(&Local::now().format("%Y").to_string()));
    }

    #[test]
    fn test_level_text() {
        assert_eq!(level_band(Level::Advanced), "ADVANCED LEVEL (C1-C2)");
        assert!(level_language(Level::Beginner).contains("10-15 words"));
        let system = json_teacher_system("writing quizzes", Level::Intermediate);
        assert!(system.contains("intermediate-level"));
        assert!(system.ends_with(JSON_ONLY));
    }
}
