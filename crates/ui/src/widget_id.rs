use std::fmt;
use uuid::Uuid;

/// Opaque per-widget identifier, assigned once at construction.
///
/// Rendered into global handler names, so it only ever holds ASCII
/// alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Builds an id from a caller-chosen value. Returns `None` unless `raw` is
    /// non-empty ASCII alphanumeric.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        (!raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())).then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the global click handler owned by this widget.
    #[must_use]
    pub fn handler_name(&self) -> String {
        format!("selectHappyBirdFile_{}", self.0)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
