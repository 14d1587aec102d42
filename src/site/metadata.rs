//! Static page metadata emitted into the document head.

use super::error::{SiteError, SiteResult};

/// Application title shown in the browser tab.
pub const TITLE: &str = "Quotos";

/// Description exposed to crawlers through the description meta tag.
pub const DESCRIPTION: &str = "A platform that unites users through philosophical ideas and thoughts";

/// Document language attribute.
pub const LANG: &str = "en";

/// Page-independent metadata for every rendered document.
///
/// Immutable once built. All fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    title: String,
    description: String,
    lang: String,
}

impl PageMetadata {
    /// Build metadata, rejecting empty or whitespace-only values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        lang: impl Into<String>,
    ) -> SiteResult<Self> {
        let title = non_empty("title", title.into())?;
        let description = non_empty("description", description.into())?;
        let lang = non_empty("lang", lang.into())?;

        Ok(Self {
            title,
            description,
            lang,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            lang: LANG.to_string(),
        }
    }
}

fn non_empty(field: &'static str, value: String) -> SiteResult<String> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidMetadata { field });
    }
    Ok(value)
}
