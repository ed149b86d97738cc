use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::host::MarkupHost;

#[derive(Clone)]
pub struct MockMarkupHost {
    rendered: Arc<RwLock<Vec<String>>>,
    reject_containing: Option<String>,
}

impl MockMarkupHost {
    pub fn new() -> Self {
        MockMarkupHost {
            rendered: Arc::new(RwLock::new(Vec::new())),
            reject_containing: None,
        }
    }

    pub fn rejecting(marker: &str) -> Self {
        let mut mock = MockMarkupHost::new();
        mock.reject_containing = Some(marker.to_owned());
        mock
    }

    pub fn flush(&mut self) -> Vec<String> {
        std::mem::replace(&mut *self.rendered.write(), Vec::new())
    }
}

impl MarkupHost for MockMarkupHost {
    fn validate_markup(&self, markup: &str) -> Result<()> {
        match &self.reject_containing {
            Some(marker) if markup.contains(marker.as_str()) => {
                Err(anyhow!("malformed markup near '{}'", marker))
            }
            _ => Ok(()),
        }
    }

    fn markup_to_html(&self, markup: &str) -> Result<String> {
        self.validate_markup(markup)?;
        self.rendered.write().push(markup.to_owned());
        Ok(format!("<p>{}</p>", markup))
    }
}
