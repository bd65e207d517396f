//! Fixed informational payloads.

use serde::{Deserialize, Serialize};

/// A single-message response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The message text.
    pub message: String,
}

impl Message {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The research-use-only disclaimer shown to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    /// Disclaimer heading.
    pub title: String,
    /// Disclaimer body.
    pub content: String,
}

impl Disclaimer {
    /// Heading of the RUO disclaimer.
    pub const TITLE: &'static str = "Research Use Only";

    /// Body of the RUO disclaimer.
    pub const CONTENT: &'static str = "All products are intended for laboratory research use only. \
        Not for human or veterinary use, diagnostics, or therapeutic applications. \
        By proceeding, you confirm you are a qualified researcher in compliance with applicable laws and regulations.";

    /// Returns the research-use-only disclaimer.
    pub fn research_use_only() -> Self {
        Self {
            title: Self::TITLE.to_string(),
            content: Self::CONTENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclaimer_text() {
        let disclaimer = Disclaimer::research_use_only();
        assert_eq!(disclaimer.title, "Research Use Only");
        assert!(disclaimer
            .content
            .starts_with("All products are intended for laboratory research use only. Not for"));
        assert!(disclaimer.content.ends_with("applicable laws and regulations."));
    }
}
