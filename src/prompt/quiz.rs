use crate::prompt::common::{json_teacher_system, level_band, level_language};
use crate::types::Level;

/// Prompt for five context-based vocabulary questions.
pub fn quiz_prompt(title: &str, article: &str, keywords: &[String], level: Level) -> String {
    let vocabulary = if keywords.is_empty() {
        String::new()
    } else {
        format!("Key Vocabulary from Article: {}\n", keywords.join(", "))
    };

    format!(
        r#"You are an English language teacher creating vocabulary quizzes from news articles for {level}-level learners. Create 5 quiz questions that test how SPECIFIC words are used IN THE CONTEXT OF THIS ARTICLE.

{band}:
{language}

Article Title: {title}
Article Content:
----------
{article}
----------
{vocabulary}
## FOR EACH QUESTION
1. Pick a word or phrase that appears in the article.
2. Ask what it means in this article: "In this article, what does '[word]' mean?"
3. Give 4 options: ONE meaning that fits this article, THREE real meanings that fit other contexts.
4. Every option must be a real word or phrase. NEVER use placeholders like "Option A" or "Choice B".
5. Vary the position of the correct answer (0, 1, 2 or 3) across questions.
6. Explain the answer by quoting the sentence where the word appears.

## RESPONSE FORMAT
[
  {{
    "question": "In this article, what does 'impact' mean?",
    "options": ["effect or influence", "collision or crash", "significance", "consequence"],
    "correctAnswer": 0,
    "explanation": "The article talks about the environmental impact of the policy, meaning its effect.",
    "word": "impact"
  }}
]
"#,
        level = level,
        band = level_band(level),
        language = level_language(level),
        title = title,
        article = article,
        vocabulary = vocabulary,
    )
}

pub fn quiz_system(level: Level) -> String {
    json_teacher_system(
        "creating context-based vocabulary quizzes from news articles; respond with a JSON array",
        level,
    )
}
