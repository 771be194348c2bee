// Declare submodules
mod common;
mod cultural;
mod feedback;
mod question;
mod quiz;
mod rephrase;
mod summary;

pub use common::*;
pub use cultural::{cultural_context_prompt, cultural_context_system, CULTURAL_CONTENT_CHARS};
pub use feedback::{writing_feedback_prompt, writing_feedback_system};
pub use question::{writing_question_prompt, writing_question_system};
pub use quiz::{quiz_prompt, quiz_system};
pub use rephrase::{rephrase_prompt, rephrase_system};
pub use summary::{news_summary_prompt, news_summary_system, SUMMARY_CONTENT_CHARS};
