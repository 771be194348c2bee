use crate::json::truncate_chars;
use crate::prompt::common::{json_teacher_system, level_band, level_language, JSON_ONLY};
use crate::types::Level;

/// Characters of article body summarized.
pub const SUMMARY_CONTENT_CHARS: usize = 3000;

struct SummaryGuidelines {
    summary: &'static str,
    keywords: &'static str,
    grammar: &'static str,
}

fn summary_guidelines(level: Level) -> SummaryGuidelines {
    match level {
        Level::Beginner => SummaryGuidelines {
            summary: "Write a VERY SIMPLE summary in 3-4 VERY SHORT sentences (8-12 words each) using ONLY basic A1-A2 vocabulary and the present or simple past tense.",
            keywords: r#"Extract 5 VERY SIMPLE, common words beginners must learn (e.g., "important", "change", "people", "country", "help"). Avoid technical and academic terms."#,
            grammar: r#"Identify 3 VERY BASIC grammar points, such as "Simple present tense", "Basic past tense", "Simple questions" or "Basic prepositions"."#,
        },
        Level::Intermediate => SummaryGuidelines {
            summary: "Write a DETAILED summary in 5-6 sentences (15-25 words each) using B1-B2 vocabulary, varied tenses and some relative clauses or conditionals.",
            keywords: r#"Extract 5 intermediate words including SOME academic terms (e.g., "significant", "implement", "analysis", "strategy", "impact")."#,
            grammar: r#"Identify 3 intermediate grammar points, such as "Present perfect tense", "Passive voice", "Conditional sentences", "Relative clauses" or "Reported speech"."#,
        },
        Level::Advanced => SummaryGuidelines {
            summary: "Write a COMPREHENSIVE summary in 7-8 sentences (20-35 words each) using C1-C2 vocabulary, nominalizations and complex noun phrases.",
            keywords: r#"Extract 5 ADVANCED words (e.g., "substantiate", "paradigm", "facilitate", "comprehensive", "nuanced") that challenge even advanced learners."#,
            grammar: r#"Identify 3 ADVANCED grammar points, such as "Subjunctive mood", "Inverted conditionals", "Cleft sentences" or "Complex noun phrases"."#,
        },
    }
}

/// Prompt for a level-adapted summary with vocabulary and grammar highlights.
pub fn news_summary_prompt(title: &str, content: &str, level: Level) -> String {
    let guidelines = summary_guidelines(level);
    format!(
        r#"{band}:
{language}

Summarize this news article for a {level} English learner.

Article Title: {title}
Article Content:
----------
{article}
----------

{summary}

{keywords}

{grammar}

Provide a JSON response with this exact structure:
{{
  "summary": "Your summary here following the guidelines above",
  "keywords": ["word1", "word2", "word3", "word4", "word5"],
  "grammarPoints": ["grammar point 1", "grammar point 2", "grammar point 3"]
}}

{json_only}
"#,
        band = level_band(level),
        language = level_language(level),
        level = level,
        title = title,
        article = truncate_chars(content, SUMMARY_CONTENT_CHARS),
        summary = guidelines.summary,
        keywords = guidelines.keywords,
        grammar = guidelines.grammar,
        json_only = JSON_ONLY,
    )
}

pub fn news_summary_system(level: Level) -> String {
    json_teacher_system("adapting news to the learner's proficiency exactly", level)
}
