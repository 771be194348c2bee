use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use news_tutor::context::rules::{find_forbidden_phrase, FORBIDDEN_PHRASES};
use news_tutor::context::{classify, evaluate_for_acceptance, fallback_title, is_generic};
use news_tutor::{
    cultural_context_for_request, generate_cultural_context, generate_news_summary,
    generate_question, generate_quiz, get_writing_feedback, quiz_for_request, rephrase_text,
    ArticleRequest, FeedbackRequest, LLMParams, Level, QuizRequest, TextGenerator,
};

/// Replays canned replies in order and records every prompt it was sent.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(replies: &[&str]) -> Self {
        ScriptedGenerator {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate_text(&self, prompt: &str, _system: Option<&str>) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted"))
    }
}

/// A configured backend that is down.
struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate_text(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
        Err(anyhow!("503 Service Unavailable"))
    }
}

const LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

const ARTICLES: &[(&str, &str)] = &[
    (
        "Huskers prepare for season opener",
        "The University of Nebraska football team, the Huskers, opened camp this week in Lincoln.",
    ),
    (
        "Pipe bomb suspect arrested",
        "Federal authorities made their first arrest Thursday in connection with two pipe bombs left outside the DNC and RNC on January 5, 2021.",
    ),
    (
        "Trump announces new tariffs",
        "Trump said the trade measures on China would take effect next month.",
    ),
    (
        "Taipei responds to drills",
        "Taiwan's government said it was monitoring exercises near the island.",
    ),
    (
        "Budget vote delayed",
        "In 2023, Japan's parliament delayed a vote on the spending plan after 40% of members objected.",
    ),
    ("COP talks continue", "Delegates argued about emission targets late into the night."),
    ("Local bakery opens", "Fresh bread sold out within an hour."),
    ("x", "y"),
];

#[tokio::test]
async fn test_every_generator_survives_a_provider_outage() {
    for (title, content) in ARTICLES {
        for level in LEVELS {
            let context = generate_cultural_context(&FailingGenerator, title, content, level).await;
            assert!(!context.title.is_empty());
            assert!(!context.examples.is_empty());
            assert!(
                !is_generic(&context.description),
                "{} / {}: {}",
                title,
                level,
                context.description
            );

            let quiz = generate_quiz(&FailingGenerator, title, content, &[], level).await;
            assert!(!quiz.is_empty());
            assert!(quiz.iter().all(|item| item.options.len() == 4 && item.correct_answer < 4));

            let question = generate_question(&FailingGenerator, title, content, level).await;
            assert!(!question.is_empty());

            let summary = generate_news_summary(&FailingGenerator, title, content, level).await;
            assert_eq!(summary.keywords.len(), 5);
        }
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn test_fallback_survives_generic_title_words() {
    let contents = [
        "Farmers in Japan met with officials on Tuesday.",
        "Farmers met with officials in 2020 after the election.",
        "Farmers met with officials on Tuesday.",
    ];
    let mut titles: Vec<String> = FORBIDDEN_PHRASES
        .iter()
        .map(|phrase| format!("{} Worry Farmers", title_case(phrase)))
        .collect();
    titles.push("Developments In Japan".to_string());
    titles.push("News Emerged Today".to_string());

    for title in &titles {
        for content in contents {
            for level in LEVELS {
                let context = generate_cultural_context(&FailingGenerator, title, content, level).await;
                assert!(
                    !is_generic(&context.description),
                    "{} / {} / {}: {}",
                    title,
                    content,
                    level,
                    context.description
                );
            }
        }
    }
}

#[tokio::test]
async fn test_unconfigured_backend_matches_failing_backend() {
    let offline = LLMParams::unavailable();
    let (title, content) = ARTICLES[4];
    for level in LEVELS {
        assert_eq!(
            generate_cultural_context(&offline, title, content, level).await,
            generate_cultural_context(&FailingGenerator, title, content, level).await
        );
    }
}

#[tokio::test]
async fn test_huskers_end_to_end() {
    let llm = ScriptedGenerator::new(&[r#"{
        "title": "Huskers: Cultural and Historical Context",
        "description": "This topic has important cultural and historical background. Understanding the context helps interpret news about this subject. Different cultures and historical experiences shape how people view this topic.",
        "examples": ["cultural awareness", "societal impact"]
    }"#]);
    let (title, content) = ARTICLES[0];
    let context = generate_cultural_context(&llm, title, content, Level::Intermediate).await;

    assert!(
        context.description.starts_with("The University of Nebraska"),
        "{}",
        context.description
    );
    assert_eq!(find_forbidden_phrase(&context.description), None);
    // the model's title goes with its rejected description
    assert_eq!(context.title, fallback_title(classify(title, content), title));
    assert_eq!(context.title, "Education Systems and Cultural Values");

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Huskers prepare for season opener"));
    assert!(prompts[0].contains("University of Nebraska"));
}

#[tokio::test]
async fn test_specific_context_is_kept() {
    let description = "On January 6, 2021, supporters of Donald Trump stormed the United States Capitol while Congress certified the 2020 election. \
        The FBI later opened more than 1,000 cases, and investigators linked the day to pipe bombs found near the DNC and RNC. \
        Congress formed a select committee in 2021 that held televised hearings through 2022. \
        Prosecutors in Washington charged people from nearly every state, which made the riot one of the largest investigations in FBI history.";
    assert!(!evaluate_for_acceptance(description).is_generic);

    let reply = serde_json::json!({
        "title": "January 6 and Its Investigations",
        "description": description,
        "examples": ["select committee", "certification", "pipe bombs"],
    });
    let raw = format!("```json\n{}\n```", reply);
    let llm = ScriptedGenerator::new(&[raw.as_str()]);
    let (title, content) = ARTICLES[1];
    let context = generate_cultural_context(&llm, title, content, Level::Advanced).await;

    assert_eq!(context.title, "January 6 and Its Investigations");
    assert_eq!(context.description, description);
    assert_eq!(context.examples.len(), 3);
}

#[tokio::test]
async fn test_quiz_fallback_for_impact() {
    let quiz = generate_quiz(
        &FailingGenerator,
        "Policy review",
        "The impact of the new policy surprised economists.",
        &["impact".to_string()],
        Level::Intermediate,
    )
    .await;

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz[0].id, "fallback-1");
    assert_eq!(quiz[0].correct_answer, 0);
    assert_eq!(quiz[0].options[0], "effect or influence");
    assert_eq!(quiz[0].word, "impact");
}

#[tokio::test]
async fn test_quiz_answers_are_spread() {
    let item = |word: &str| {
        serde_json::json!({
            "question": format!("In this article, what does '{}' mean?", word),
            "options": ["right meaning", "wrong one", "wrong two", "wrong three"],
            "correctAnswer": 0,
            "explanation": "From the article.",
            "word": word,
        })
    };
    let reply = serde_json::json!([item("a1"), item("b2"), item("c3"), item("d4"), item("e5")]);
    let raw = reply.to_string();
    let llm = ScriptedGenerator::new(&[raw.as_str()]);
    let quiz = generate_quiz(&llm, "t", "c", &[], Level::Beginner).await;

    let positions: Vec<usize> = quiz.iter().map(|q| q.correct_answer).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 0]);
    assert!(quiz.iter().all(|q| q.correct_option() == Some("right meaning")));
}

#[tokio::test]
async fn test_feedback_and_rephrase_paths() {
    let request = FeedbackRequest {
        text: "I think schools should ban phones because students focus better.".to_string(),
        article_title: Some("Schools ban phones".to_string()),
        article_content: Some("Several schools in Ohio banned smartphones.".to_string()),
        question: Some("What do you think about the ban?".to_string()),
        level: Level::Beginner,
    };
    assert!(request.validate().is_ok());

    let offline = get_writing_feedback(&LLMParams::unavailable(), &request).await;
    assert_eq!(offline.structure.score, 65);
    assert!(offline.improved.starts_with("I believe"));

    let failed = get_writing_feedback(&FailingGenerator, &request).await;
    assert_eq!(failed.grammar.comments, vec!["Error processing"]);

    let llm = ScriptedGenerator::new(&[]);
    let rephrased = rephrase_text(&llm, "We must develop a strategy.").await;
    assert_eq!(rephrased.beginner, "We must make a plan.");
    assert_eq!(rephrased.intermediate, "We must develop a strategy.");
    assert_eq!(llm.prompts().len(), 1);
}

#[tokio::test]
async fn test_requests_are_validated_before_generation() {
    let (title, content) = ARTICLES[4];
    let article = ArticleRequest::new(title, content, Level::Advanced);
    assert_eq!(
        cultural_context_for_request(&FailingGenerator, &article).await.unwrap(),
        generate_cultural_context(&FailingGenerator, title, content, Level::Advanced).await
    );

    let blank = ArticleRequest::new(title, "   ", Level::Advanced);
    let llm = ScriptedGenerator::new(&[]);
    assert!(cultural_context_for_request(&llm, &blank).await.is_err());

    let quiz: QuizRequest = serde_json::from_str(
        r#"{"title": "Policy review", "content": "The impact of the new policy surprised economists.", "keywords": ["impact"]}"#,
    )
    .unwrap();
    let items = quiz_for_request(&FailingGenerator, &quiz).await.unwrap();
    assert_eq!(items[0].word, "impact");

    let untitled = QuizRequest {
        content: "Some body".to_string(),
        ..QuizRequest::default()
    };
    assert!(quiz_for_request(&llm, &untitled).await.is_err());
    assert!(llm.prompts().is_empty());
}
