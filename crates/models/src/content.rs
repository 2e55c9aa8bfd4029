use serde::{Deserialize, Serialize};

/// Payload of the content endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSelection {
    #[serde(default)]
    pub selected_file: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ContentSelection {
    /// Nothing selected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The selected path, if a file is selected and has something to show.
    #[must_use]
    pub fn displayable(&self) -> Option<(&str, &str)> {
        match &self.selected_file {
            Some(path) if !path.is_empty() && !self.content.is_empty() => Some((path.as_str(), self.content.as_str())),
            _ => None,
        }
    }
}
