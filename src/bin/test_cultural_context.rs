use clap::{Parser, ValueEnum};
use news_tutor::context::{classify, evaluate, extract};
use news_tutor::environment::LlmConfig;
use news_tutor::logging::configure_logging;
use news_tutor::{
    cultural_context_for_request, generate_news_summary, generate_question, get_writing_feedback,
    quiz_for_request, rephrase_text, ArticleRequest, FeedbackRequest, LLMParams, Level, QuizRequest,
    TextGenerator,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Generator {
    Context,
    Quiz,
    Question,
    Feedback,
    Summary,
    Rephrase,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Run one generator against an article and print JSON", long_about = None)]
struct Args {
    /// File path to the article body
    #[arg(short = 'f', long)]
    file: Option<String>,

    /// Article title
    #[arg(short = 't', long, default_value = "Huskers prepare for season opener")]
    title: String,

    /// Reader level: beginner, intermediate or advanced
    #[arg(short = 'l', long, default_value = "intermediate")]
    level: String,

    /// Which generator to run
    #[arg(short = 'g', long, value_enum, default_value = "context")]
    generator: Generator,

    /// Comma-separated quiz keywords
    #[arg(short = 'k', long)]
    keywords: Option<String>,

    /// Learner text for feedback, or text to rephrase
    #[arg(short = 'w', long)]
    writing: Option<String>,

    /// Ignore configured API keys and use the local fallbacks
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_logging();
    let args = Args::parse();

    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => "Nebraska fans packed Memorial Stadium on Saturday as the Huskers opened the 2024 season. \
            The University of Nebraska has played football since 1890, and about 86,000 people attended."
            .to_string(),
    };
    let level = Level::from(args.level.as_str());
    let article = ArticleRequest::new(&args.title, &content, level);
    article.validate()?;

    let params = if args.offline {
        LLMParams::unavailable()
    } else {
        LlmConfig::from_env().build_params()?
    };
    let llm: &dyn TextGenerator = &params;
    println!("LLM available: {}", llm.is_available());

    let signals = extract(&args.title, &content);
    println!("Topic: {}", classify(&args.title, &content));
    println!("Signals: {}", signals.summary_line());

    let start_time = std::time::Instant::now();
    let output = match args.generator {
        Generator::Context => {
            let context = cultural_context_for_request(llm, &article).await?;
            let verdict = evaluate(&context.description);
            println!("Detector verdict: {}", serde_json::to_string(&verdict)?);
            serde_json::to_string_pretty(&context)?
        }
        Generator::Quiz => {
            let request = QuizRequest {
                title: article.title.clone(),
                content: article.content.clone(),
                keywords: args
                    .keywords
                    .as_deref()
                    .map(|k| {
                        k.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
                level,
            };
            let quiz = quiz_for_request(llm, &request).await?;
            serde_json::to_string_pretty(&quiz)?
        }
        Generator::Question => {
            let question = generate_question(llm, &article.title, &article.content, level).await;
            serde_json::to_string_pretty(&serde_json::json!({ "question": question }))?
        }
        Generator::Feedback => {
            let request = FeedbackRequest {
                text: args
                    .writing
                    .clone()
                    .unwrap_or_else(|| "I think the team is very good because people love it".to_string()),
                article_title: Some(args.title.clone()),
                article_content: Some(content.clone()),
                question: None,
                level,
            };
            request.validate()?;
            serde_json::to_string_pretty(&get_writing_feedback(llm, &request).await)?
        }
        Generator::Summary => {
            let summary = generate_news_summary(llm, &article.title, &article.content, level).await;
            serde_json::to_string_pretty(&summary)?
        }
        Generator::Rephrase => {
            let text = args.writing.clone().unwrap_or_else(|| content.clone());
            serde_json::to_string_pretty(&rephrase_text(llm, &text).await)?
        }
    };

    println!("\n{:?} output (generated in {:.2?}):", args.generator, start_time.elapsed());
    println!("-------------------------------------");
    println!("{}", output);
    println!("-------------------------------------");

    Ok(())
}
