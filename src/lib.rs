pub mod form;
pub mod host;
pub mod page;
pub mod validation;

pub use crate::form::TextAnswerForm;
pub use crate::page::{AnswerData, AnswerFeedback, Page, PageContext, PageRegistry, TextQuestion};
pub use crate::validation::{ValidationContext, ValidationError};
