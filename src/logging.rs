use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const STDOUT_FILTER: &str = "info,llm_request=info,cultural_context=info,quiz=warn,question=warn,feedback=warn,summary=warn,rephrase=warn";
const FILE_FILTER: &str = "info,llm_request=debug,cultural_context=debug,quiz=debug,question=debug,feedback=debug,summary=debug,rephrase=debug,reqwest=warn";

/// Installs the global subscriber: terse stdout, verbose daily log file.
///
/// `RUST_LOG` overrides the stdout filter when set.
pub fn configure_logging() {
    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STDOUT_FILTER));

    let stdout_log = fmt::layer()
        .with_writer(io::stdout)
        .with_filter(stdout_filter);

    // Validation verdicts and raw replies only go to the file.
    let file_appender = rolling::daily("logs", "news_tutor.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        TARGET_CONTEXT, TARGET_FEEDBACK, TARGET_LLM_REQUEST, TARGET_QUESTION, TARGET_QUIZ,
        TARGET_REPHRASE, TARGET_SUMMARY,
    };

    #[test]
    fn test_filters_name_every_target() {
        let targets = [
            TARGET_LLM_REQUEST,
            TARGET_CONTEXT,
            TARGET_QUIZ,
            TARGET_QUESTION,
            TARGET_FEEDBACK,
            TARGET_SUMMARY,
            TARGET_REPHRASE,
        ];
        for filter in [STDOUT_FILTER, FILE_FILTER] {
            let directives: Vec<&str> = filter
                .split(',')
                .filter_map(|directive| directive.split('=').next())
                .collect();
            for target in targets {
                assert!(directives.contains(&target), "{} missing from {}", target, filter);
            }
            assert!(EnvFilter::try_new(filter).is_ok());
        }
    }
}
