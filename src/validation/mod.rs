use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

use crate::host::MarkupHost;


lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9_]*$").unwrap();
}

// Raised when a page descriptor is structurally invalid. Surfaced to the
// course author at build time, never to the student.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{location}: {message}")]
pub struct ValidationError {
    pub location: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(location: &str, message: &str) -> Self {
        ValidationError {
            location: location.to_owned(),
            message: message.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationWarning {
    pub location: String,
    pub text: String,
}

pub struct ValidationContext<'a> {
    markup_host: &'a dyn MarkupHost,
    warnings: Vec<ValidationWarning>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(markup_host: &'a dyn MarkupHost) -> Self {
        ValidationContext {
            markup_host,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, location: &str, text: &str) {
        self.warnings.push(ValidationWarning {
            location: location.to_owned(),
            text: text.to_owned(),
        });
    }

    pub fn warnings(&self) -> &Vec<ValidationWarning> {
        &self.warnings
    }

    pub fn validate_markup(&self, location: &str, markup: &str) -> Result<(), ValidationError> {
        self.markup_host
            .validate_markup(markup)
            .map_err(|e| ValidationError::new(location, &format!("invalid markup: {:#}", e)))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttrType {
    Str,
    StrList,
}

impl AttrType {
    fn matches(self, value: &Value) -> bool {
        match self {
            AttrType::Str => value.is_string(),
            AttrType::StrList => match value.as_array() {
                Some(items) => items.iter().all(|item| item.is_string()),
                None => false,
            },
        }
    }

    fn describe(self) -> &'static str {
        match self {
            AttrType::Str => "a string",
            AttrType::StrList => "a list of strings",
        }
    }
}

pub fn validate_struct(
    location: &str,
    descriptor: &Value,
    required_attrs: &[(&str, AttrType)],
    allowed_attrs: &[(&str, AttrType)],
) -> Result<(), ValidationError> {
    let fields = match descriptor.as_object() {
        Some(fields) => fields,
        None => return Err(ValidationError::new(location, "page descriptor must be a mapping")),
    };

    for (name, attr_type) in required_attrs {
        match fields.get(*name) {
            None => {
                return Err(ValidationError::new(
                    location,
                    &format!("attribute '{}' is missing", name),
                ))
            }
            Some(value) if !attr_type.matches(value) => {
                return Err(ValidationError::new(
                    location,
                    &format!("attribute '{}' must be {}", name, attr_type.describe()),
                ))
            }
            Some(_) => (),
        }
    }

    for (name, attr_type) in allowed_attrs {
        if let Some(value) = fields.get(*name) {
            if !attr_type.matches(value) {
                return Err(ValidationError::new(
                    location,
                    &format!("attribute '{}' must be {}", name, attr_type.describe()),
                ));
            }
        }
    }

    let known: HashSet<&str> = required_attrs
        .iter()
        .chain(allowed_attrs.iter())
        .map(|(name, _attr_type)| *name)
        .collect();
    let extraneous: Vec<&str> = fields
        .keys()
        .map(|key| key.as_str())
        .filter(|key| !known.contains(key))
        .collect();
    if !extraneous.is_empty() {
        return Err(ValidationError::new(
            location,
            &format!("extraneous attribute(s): {}", extraneous.iter().join(", ")),
        ));
    }

    Ok(())
}

pub fn validate_identifier(location: &str, id: &str) -> Result<(), ValidationError> {
    if IDENTIFIER_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(ValidationError::new(
            location,
            &format!("'{}' is not a valid page id", id),
        ))
    }
}
