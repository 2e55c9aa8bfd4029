use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating context the widget is displayed in.
///
/// Only affects cosmetic labelling; endpoints behave the same in every mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ServingMode {
    /// No server, endpoint data captured in-process.
    #[default]
    Checkpoint,
    /// Local server running next to the notebook.
    Thread,
    /// Served by the SyftBox host application.
    SyftBox,
    /// Any other tag reported by a host. Rendered with neutral styling.
    Unrecognized(String),
}

impl ServingMode {
    pub const KNOWN: [Self; 3] = [Self::Checkpoint, Self::Thread, Self::SyftBox];

    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "checkpoint" => Self::Checkpoint,
            "thread" => Self::Thread,
            "syftbox" => Self::SyftBox,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Checkpoint => "checkpoint",
            Self::Thread => "thread",
            Self::SyftBox => "syftbox",
            Self::Unrecognized(tag) => tag,
        }
    }

    #[must_use]
    pub fn is_served(&self) -> bool {
        matches!(self, Self::Thread | Self::SyftBox)
    }
}

impl FromStr for ServingMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for ServingMode {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ServingMode> for String {
    fn from(mode: ServingMode) -> Self {
        mode.tag().to_string()
    }
}

impl fmt::Display for ServingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
