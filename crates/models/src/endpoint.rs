use std::fmt;

/// The read-only data endpoints exposed by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Files,
    Content,
    Stats,
}

impl Endpoint {
    pub const ALL: [Self; 3] = [Self::Files, Self::Content, Self::Stats];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Files => "/api/happybird/files",
            Self::Content => "/api/happybird/content",
            Self::Stats => "/api/happybird/stats",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|e| e.path() == path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
