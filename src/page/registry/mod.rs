use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::page::{text_question, Page};
use crate::validation::{ValidationContext, ValidationError};


pub type PageFactory = fn(
    &mut ValidationContext<'_>,
    &str,
    &Value,
) -> Result<Box<dyn Page>, ValidationError>;

// Maps a descriptor's `type` attribute to a page constructor.
pub struct PageRegistry {
    factories: RwLock<HashMap<String, PageFactory>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        let registry = PageRegistry {
            factories: RwLock::new(HashMap::new()),
        };
        registry.register(text_question::PAGE_TYPE, text_question::make_page);
        registry
    }

    pub fn register(&self, page_type: &str, factory: PageFactory) {
        self.factories.write().insert(page_type.to_owned(), factory);
    }

    pub fn instantiate(
        &self,
        vctx: &mut ValidationContext,
        location: &str,
        descriptor: &Value,
    ) -> Result<Box<dyn Page>, ValidationError> {
        let page_type = match descriptor.get("type") {
            None => {
                return Err(ValidationError::new(location, "attribute 'type' is missing"))
            }
            Some(value) => match value.as_str() {
                Some(page_type) => page_type.to_owned(),
                None => {
                    return Err(ValidationError::new(
                        location,
                        "attribute 'type' must be a string",
                    ))
                }
            },
        };

        let factory = self.factories.read().get(&page_type).copied();
        match factory {
            Some(factory) => {
                debug!("Instantiating page of type: {}", page_type);
                factory(vctx, location, descriptor)
            }
            None => Err(ValidationError::new(
                location,
                &format!("unknown page type '{}'", page_type),
            )),
        }
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        PageRegistry::new()
    }
}
