use anyhow::Result;

#[cfg(test)]
pub mod mock;

// Services implemented by the course platform embedding this crate.
pub trait MarkupHost {
    fn validate_markup(&self, markup: &str) -> Result<()>;

    fn markup_to_html(&self, markup: &str) -> Result<String>;
}
