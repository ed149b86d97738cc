use anyhow::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::form::TextAnswerForm;
use crate::page::{AnswerData, AnswerFeedback, Page, PageContext};
use crate::validation::{
    validate_identifier, validate_struct, AttrType, ValidationContext, ValidationError,
};


pub const PAGE_TYPE: &str = "TextQuestion";

#[derive(Clone, Debug, Deserialize)]
struct RawTextQuestion {
    id: String,
    title: String,
    answers: Vec<String>,
    prompt: String,
}

// Free-text question graded by exact match against a list of accepted
// answers. Comparisons are case-sensitive; submissions are trimmed before
// they are stored.
#[derive(Clone, Debug)]
pub struct TextQuestion {
    id: String,
    title: String,
    prompt: String,
    answers: Vec<String>,
}

pub fn make_page(
    vctx: &mut ValidationContext,
    location: &str,
    descriptor: &Value,
) -> Result<Box<dyn Page>, ValidationError> {
    Ok(Box::new(TextQuestion::new(vctx, location, descriptor)?))
}

impl TextQuestion {
    pub fn new(
        vctx: &mut ValidationContext,
        location: &str,
        descriptor: &Value,
    ) -> Result<TextQuestion, ValidationError> {
        validate_struct(
            location,
            descriptor,
            &[
                ("type", AttrType::Str),
                ("id", AttrType::Str),
                ("title", AttrType::Str),
                ("answers", AttrType::StrList),
                ("prompt", AttrType::Str),
            ],
            &[],
        )?;

        let raw: RawTextQuestion = match serde_json::from_value(descriptor.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                return Err(ValidationError::new(
                    location,
                    &format!("malformed page descriptor: {}", e),
                ))
            }
        };

        if raw.answers.is_empty() {
            return Err(ValidationError::new(
                location,
                "at least one answer must be provided",
            ));
        }

        validate_identifier(location, &raw.id)?;

        for answer in &raw.answers {
            if answer.trim().is_empty() {
                vctx.add_warning(location, "an empty answer can never match a submission");
            } else if answer.trim() != answer {
                vctx.add_warning(
                    location,
                    &format!(
                        "answer '{}' has surrounding whitespace and can never match a trimmed submission",
                        answer
                    ),
                );
            }
        }

        vctx.validate_markup(location, &raw.prompt)?;

        debug!("Validated text question page: {}", raw.id);

        Ok(TextQuestion {
            id: raw.id,
            title: raw.title,
            prompt: raw.prompt,
            answers: raw.answers,
        })
    }

    fn is_answer_correct(&self, answer: &str) -> bool {
        self.answers.iter().any(|accepted| accepted == answer)
    }

    fn correct_answer_text(&self) -> String {
        format!("A correct answer is: '{}'.", self.answers[0])
    }
}

impl Page for TextQuestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self, context: &PageContext) -> Result<String> {
        context.markup_host.markup_to_html(&self.prompt)
    }

    fn expects_answer(&self) -> bool {
        true
    }

    fn max_points(&self) -> u32 {
        1
    }

    fn make_form(&self, answer_data: Option<&AnswerData>, answer_is_final: bool) -> TextAnswerForm {
        let mut form = match answer_data {
            Some(answer_data) => TextAnswerForm::with_answer(&answer_data.answer),
            None => TextAnswerForm::new(),
        };
        if answer_is_final {
            form.set_read_only();
        }
        form
    }

    fn post_form(&self, post_data: &Map<String, Value>) -> TextAnswerForm {
        TextAnswerForm::from_post_data(post_data)
    }

    fn answer_data(&self, form: &TextAnswerForm) -> Option<AnswerData> {
        form.cleaned_answer().map(|answer| AnswerData { answer })
    }

    fn grade(&self, answer_data: Option<&AnswerData>) -> AnswerFeedback {
        let correct_answer = self.correct_answer_text();

        let answer_data = match answer_data {
            Some(answer_data) => answer_data,
            None => {
                return AnswerFeedback {
                    correctness: 0.0,
                    feedback: Some("No answer provided.".to_owned()),
                    correct_answer,
                }
            }
        };

        let correctness = if self.is_answer_correct(&answer_data.answer) {
            1.0
        } else {
            0.0
        };
        debug!("Graded answer for page {}: correctness {}", self.id, correctness);

        AnswerFeedback {
            correctness,
            feedback: None,
            correct_answer,
        }
    }
}
