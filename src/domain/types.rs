use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpamStatus {
    #[default]
    Ham,
    Spam,
}

impl SpamStatus {
    pub fn label(self) -> &'static str {
        match self {
            SpamStatus::Ham => "HAM",
            SpamStatus::Spam => "SPAM",
        }
    }

    pub fn style_tag(self) -> &'static str {
        match self {
            SpamStatus::Ham => "tab ham",
            SpamStatus::Spam => "tab spam",
        }
    }
}

impl fmt::Display for SpamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}", self.label())
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub content: &'a str,
}
