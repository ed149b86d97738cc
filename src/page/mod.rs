use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::form::TextAnswerForm;
use crate::host::MarkupHost;

pub mod registry;
pub mod text_question;

pub use self::registry::PageRegistry;
pub use self::text_question::TextQuestion;

// Submitted answer, as persisted by the host between submission and grading.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AnswerData {
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerFeedback {
    pub correctness: f32,
    pub feedback: Option<String>,
    pub correct_answer: String,
}

pub struct PageContext<'a> {
    pub markup_host: &'a dyn MarkupHost,
}

pub trait Page: std::fmt::Debug {
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn body(&self, context: &PageContext) -> Result<String>;

    fn expects_answer(&self) -> bool;

    fn max_points(&self) -> u32;

    fn make_form(&self, answer_data: Option<&AnswerData>, answer_is_final: bool) -> TextAnswerForm;

    fn post_form(&self, post_data: &Map<String, Value>) -> TextAnswerForm;

    fn answer_data(&self, form: &TextAnswerForm) -> Option<AnswerData>;

    fn grade(&self, answer_data: Option<&AnswerData>) -> AnswerFeedback;
}
