use crate::context::{ExtractedSignals, Topic};
use crate::json::truncate_chars;
use crate::prompt::common::{current_date, level_band, DONT_TELL_ME, JSON_ONLY};
use crate::types::Level;

/// Characters of article body embedded in the prompt.
pub const CULTURAL_CONTENT_CHARS: usize = 8000;

fn cultural_level_guidance(level: Level) -> String {
    let details = match level {
        Level::Beginner => {
            r#"- Use VERY simple language and basic vocabulary (e.g., "important", "people", "different", "same")
- Use short sentences (10-15 words maximum)
- Focus on simple facts: who, where, when
- Avoid academic terms and abstract analysis
- Write 3-4 simple sentences"#
        }
        Level::Intermediate => {
            r#"- Use clear language with SOME academic vocabulary (e.g., "perspective", "significance", "tradition", "society")
- Use medium-length sentences (15-25 words)
- Include historical context and examples from the countries or regions in the article
- Write 5-6 detailed sentences"#
        }
        Level::Advanced => {
            r#"- Use sophisticated vocabulary (e.g., "ideological framework", "historical trajectory", "cross-cultural perspective")
- Use complex sentence structures (20-35 words)
- Include deep historical context and competing interpretations
- Write 7-8 comprehensive sentences"#
        }
    };
    format!("{}:\n{}", level_band(level), details)
}

/// Prompt asking for cultural and historical background to a single article.
pub fn cultural_context_prompt(
    title: &str,
    content: &str,
    topic: Topic,
    signals: &ExtractedSignals,
    level: Level,
) -> String {
    let article = truncate_chars(content, CULTURAL_CONTENT_CHARS);
    let entities = if signals.key_entities.is_empty() {
        "Various".to_string()
    } else {
        signals.key_entities.join(", ")
    };

    format!(
        r#"You are a cultural studies expert and educator. Provide UNIQUE, ARTICLE-SPECIFIC cultural and historical background for this news article.

## ARTICLE INFORMATION
Title: {title}
Main Topic Identified: {topic}
Key Entities Mentioned: {entities}
Specific Information Extracted: {specific}
Full Article Content ({chars} characters):
----------
{article}
----------

## STEP 1: ANALYZE THE ARTICLE
Extract the specific dates, countries, organizations, people, events and numbers the article mentions.
Use them EXACTLY as written: if the article says "January 6, 2021" or "FBI", use "January 6, 2021" or "FBI".

## STEP 2: PROVIDE BACKGROUND KNOWLEDGE
* Do NOT summarize the article; explain the background a reader needs to interpret it.
* The FIRST sentence MUST open with a concrete date, year, name or event, for example:
  - "In 2016, Donald Trump was elected..."
  - "The Chinese Civil War (1945-1949) resulted in..."
  - "The University of Nebraska fielded its first football team in 1890..."
* NEVER open with "This topic", "Understanding", "Different", "Various" or "It".
* Include at least 2-3 specific details from the article (dates, countries, organizations, people, events).
* Explain why this background matters for THIS article, using names, dates and places.
* Never write filler such as "this topic has important cultural background", "different cultures have different views" or "understanding the context helps".
* The description must be at least 250 characters long.

## LEVEL
{guidance}

## RESPONSE FORMAT
{{
  "title": "A specific, descriptive title about the cultural or historical theme",
  "description": "Background that starts with a concrete fact from the article",
  "examples": ["specific term 1", "specific term 2", "specific term 3", "specific term 4"]
}}

{json_only}
Today's date: {date}
"#,
        title = title,
        topic = topic.label(),
        entities = entities,
        specific = signals.summary_line(),
        chars = article.chars().count(),
        article = article,
        guidance = cultural_level_guidance(level),
        json_only = JSON_ONLY,
        date = current_date(),
    )
}

pub fn cultural_context_system() -> String {
    format!(
        r#"You are a cultural studies expert who gives SPECIFIC, FACTUAL background knowledge for news articles.
Every description begins with a concrete year, date, named person, organization or event taken from the article.
Responses that start with a generic statement or lack specific facts are rejected automatically.
{dont_tell_me}
Always respond with valid JSON only, no additional text."#,
        dont_tell_me = DONT_TELL_ME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::extract;

    #[test]
    fn test_prompt_embeds_article_details() {
        let title = "Huskers open season";
        let content = "Nebraska fans filled Memorial Stadium in 2024.";
        let signals = extract(title, content);
        let prompt = cultural_context_prompt(title, content, Topic::CurrentEvents, &signals, Level::Beginner);

        assert!(prompt.contains("Title: Huskers open season"));
        assert!(prompt.contains("Main Topic Identified: Current Events"));
        assert!(prompt.contains("Years mentioned: 2024"));
        assert!(prompt.contains("Memorial Stadium"));
        assert!(prompt.contains("BEGINNER LEVEL (A1-A2)"));
    }

    #[test]
    fn test_prompt_truncates_long_content() {
        let content = "é".repeat(CULTURAL_CONTENT_CHARS + 500);
        let signals = ExtractedSignals::default();
        let prompt = cultural_context_prompt("t", &content, Topic::Culture, &signals, Level::Advanced);

        assert!(prompt.contains(&format!("({} characters)", CULTURAL_CONTENT_CHARS)));
        assert!(prompt.contains("Key Entities Mentioned: Various"));
        assert!(!prompt.contains(&"é".repeat(CULTURAL_CONTENT_CHARS + 1)));
    }
}
