use crate::json::truncate_chars;
use crate::prompt::common::json_teacher_system;
use crate::types::{FeedbackRequest, Level};

/// Characters of the source article quoted back to the reviewer.
const ARTICLE_EXCERPT_CHARS: usize = 500;

fn feedback_level_guidance(level: Level) -> &'static str {
    match level {
        Level::Beginner => "BEGINNER LEVEL: Focus on basic grammar, simple vocabulary, and clear sentence structure. Be encouraging and provide simple explanations.",
        Level::Intermediate => "INTERMEDIATE LEVEL: Evaluate grammar accuracy, vocabulary variety, and logical structure. Provide constructive feedback for improvement.",
        Level::Advanced => "ADVANCED LEVEL: Assess sophisticated grammar usage, nuanced vocabulary, and complex sentence structures. Provide detailed, professional feedback.",
    }
}

fn article_reference(request: &FeedbackRequest) -> String {
    let question = request.question.as_deref().filter(|q| !q.trim().is_empty());
    match (
        request.article_title.as_deref(),
        request.article_content.as_deref(),
    ) {
        (Some(title), Some(content)) => {
            let mut block = format!(
                "\n\nThis writing is a response to the following news article:\nTitle: {}\nContent: {}",
                title,
                truncate_chars(content, ARTICLE_EXCERPT_CHARS)
            );
            match question {
                Some(q) => block.push_str(&format!(
                    "\n\nQuestion: {}\n\nEvaluate how well the writing answers the question and addresses the article's content and themes.",
                    q
                )),
                None => block.push_str(
                    "\n\nEvaluate how well the writing addresses the article's content and themes.",
                ),
            }
            block
        }
        _ => match question {
            Some(q) => format!(
                "\n\nQuestion: {}\n\nEvaluate how well the writing answers this question.",
                q
            ),
            None => String::new(),
        },
    }
}

/// Prompt asking for scored grammar, vocabulary and structure feedback.
pub fn writing_feedback_prompt(request: &FeedbackRequest) -> String {
    let level = request.level;
    format!(
        r#"Provide detailed feedback on this {level}-level English writing. {guidance}

----------
{text}
----------{reference}

Provide feedback on:
1. Grammar (score 0-100 and 3 comments), appropriate for {level} level
2. Vocabulary (score 0-100 and 3 comments), appropriate for {level} level
3. Structure (score 0-100 and 3 comments): logical structure and organization
4. 3 specific improvement suggestions (format: "original → improved")
5. An improved version of the text

Return as JSON with this exact structure:
{{
  "grammar": {{"score": number, "comments": [string, string, string]}},
  "vocabulary": {{"score": number, "comments": [string, string, string]}},
  "structure": {{"score": number, "comments": [string, string, string]}},
  "suggestions": [string, string, string],
  "improved": string
}}
"#,
        level = level,
        guidance = feedback_level_guidance(level),
        text = request.text,
        reference = article_reference(request),
    )
}

pub fn writing_feedback_system(level: Level) -> String {
    json_teacher_system("and writing tutor giving constructive feedback", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_reference_variants() {
        let mut request = FeedbackRequest {
            text: "I think it is good.".to_string(),
            ..Default::default()
        };
        assert_eq!(article_reference(&request), "");

        request.question = Some("What do you think?".to_string());
        assert!(article_reference(&request).contains("answers this question"));

        request.article_title = Some("Rates".to_string());
        request.article_content = Some("x".repeat(900));
        let block = article_reference(&request);
        assert!(block.contains("Title: Rates"));
        assert!(block.contains("answers the question and addresses"));
        assert!(!block.contains(&"x".repeat(ARTICLE_EXCERPT_CHARS + 1)));
    }
}
