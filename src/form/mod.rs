use serde_json::{Map, Value};


// Presentation hints handed to the host form framework.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormLayout {
    pub form_class: String,
    pub label_class: String,
    pub field_class: String,
}

impl Default for FormLayout {
    fn default() -> Self {
        FormLayout {
            form_class: "form-horizontal".to_owned(),
            label_class: "col-lg-2".to_owned(),
            field_class: "col-lg-8".to_owned(),
        }
    }
}

// Single required text field named "answer". The host renders it; this
// crate only decides its value and its presentation flags.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextAnswerForm {
    layout: FormLayout,
    answer: Option<String>,
    autofocus: bool,
    read_only: bool,
}

impl TextAnswerForm {
    pub fn new() -> Self {
        TextAnswerForm {
            layout: Default::default(),
            answer: None,
            autofocus: true,
            read_only: false,
        }
    }

    pub fn with_answer(answer: &str) -> Self {
        let mut form = TextAnswerForm::new();
        form.answer = Some(answer.to_owned());
        form
    }

    pub fn from_post_data(post_data: &Map<String, Value>) -> Self {
        let mut form = TextAnswerForm::new();
        form.answer = post_data
            .get("answer")
            .and_then(|value| value.as_str())
            .map(|answer| answer.to_owned());
        form
    }

    pub fn set_read_only(&mut self) {
        self.read_only = true;
    }

    pub fn is_valid(&self) -> bool {
        match &self.answer {
            Some(answer) => !answer.trim().is_empty(),
            None => false,
        }
    }

    pub fn cleaned_answer(&self) -> Option<String> {
        match &self.answer {
            Some(answer) if !answer.trim().is_empty() => Some(answer.trim().to_owned()),
            _ => None,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }
}

impl Default for TextAnswerForm {
    fn default() -> Self {
        TextAnswerForm::new()
    }
}
