use happybird_models::ServingMode;

/// Colour for checkpoint mode and any unrecognized mode.
pub const NEUTRAL_COLOR: &str = "#6c757d";

/// Corner badge naming the serving mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: &'static str,
}

impl Badge {
    #[must_use]
    pub fn for_mode(mode: &ServingMode) -> Self {
        let (label, color) = match mode {
            ServingMode::Checkpoint => ("📁 Checkpoint", NEUTRAL_COLOR),
            ServingMode::Thread => ("🧵 Thread Server", "#28a745"),
            ServingMode::SyftBox => ("📦 SyftBox", "#007bff"),
            ServingMode::Unrecognized(tag) => (tag.as_str(), NEUTRAL_COLOR),
        };
        Self {
            label: label.to_string(),
            color,
        }
    }
}
