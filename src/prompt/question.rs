use crate::prompt::common::{level_band, DONT_TELL_ME};
use crate::types::Level;

fn question_level_guidance(level: Level) -> String {
    let details = match level {
        Level::Beginner => {
            r#"- Use simple, everyday vocabulary (e.g., "think", "like", "important", "good", "bad")
- Keep the question short and easy to understand (10-15 words)
- Ask about personal opinions or simple facts
- Expect answers of 50-100 words in simple English"#
        }
        Level::Intermediate => {
            r#"- Use clear language with some academic vocabulary (e.g., "opinion", "analysis", "impact", "perspective")
- Write a question of medium complexity (15-25 words)
- Ask for opinions with reasons and examples
- Expect answers of 100-150 words"#
        }
        Level::Advanced => {
            r#"- Use sophisticated vocabulary (e.g., "critically evaluate", "implications", "nuanced perspective")
- Write a complex, thought-provoking question (20-30 words)
- Ask for critical analysis and implications
- Expect answers of 150-200 words"#
        }
    };
    format!("{}:\n{}", level_band(level), details)
}

/// Prompt for one open-ended opinion question about an article.
pub fn writing_question_prompt(
    title: &str,
    article: &str,
    key_topics: &[String],
    key_sentences: &str,
    level: Level,
) -> String {
    format!(
        r#"You are an English language teacher. Create a thoughtful writing question about this news article.

{guidance}

Article Title: {title}

Key Topics/Keywords/Entities: {topics}

Key Content Excerpt (sentences from the beginning, middle, and end):
{sentences}

Full Article Content ({chars} characters):
----------
{article}
----------

## YOUR TASK
Ask the student to write their opinion about this article. The question must:
1. Mention the article's main topic or a specific detail from it
2. Ask for opinions, reasoning or reflection
3. Match the {level} level
4. Be open-ended

## GOOD QUESTION FORMATS
* "What is your opinion on [specific topic from the article]? Please explain your thoughts."
* "After reading about [specific detail], what are your thoughts on this issue?"
* "The article discusses [topic]. What is your perspective on this matter?"

## FORBIDDEN QUESTION FORMATS
* "What is your position on this debate?"
* "Which side do you support?"
* "Do you agree or disagree?"
* "What are the two sides of this issue?"
* Generic questions that do not reference the article

Return ONLY the question text.
"#,
        guidance = question_level_guidance(level),
        title = title,
        topics = key_topics.join(", "),
        sentences = key_sentences,
        chars = article.chars().count(),
        article = article,
        level = level,
    )
}

pub fn writing_question_system(level: Level) -> String {
    format!(
        r#"You are an English language teacher creating writing prompts for students to express their opinions about news articles.
You MUST reference specific details from the article and match the {level} difficulty level.
You MUST NOT create debate-style questions asking students to choose sides.
{dont_tell_me}
Always respond with ONLY the question text."#,
        level = level,
        dont_tell_me = DONT_TELL_ME
    )
}
