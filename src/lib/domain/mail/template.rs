//! HTML email template

use std::{fs, path::Path};

use tracing::debug;

use super::MailSenderError;

/// Placeholder replaced when rendering
const NAME_PLACEHOLDER: &str = "{{name}}";

/// Value substituted for the placeholder
const NAME_VALUE: &str = "John Doe";

/// An HTML template loaded once from disk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlTemplate(String);

impl HtmlTemplate {
    /// Read the template at `path`
    pub fn from_path(path: &Path) -> Result<Self, MailSenderError> {
        let content =
            fs::read_to_string(path).map_err(|source| MailSenderError::TemplateNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("loaded template {} ({} bytes)", path.display(), content.len());

        Ok(Self(content))
    }

    /// Create a template from content already in memory
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// The raw template content
    pub fn content(&self) -> &str {
        &self.0
    }

    /// Render the HTML body, replacing every `{{name}}` with `John Doe`
    pub fn render(&self) -> String {
        self.0.replace(NAME_PLACEHOLDER, NAME_VALUE)
    }
}
