use happybird_models::{ServingMode, UNKNOWN_OWNER, WidgetData};

use crate::Badge;

/// Structured description of the widget panel, independent of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub badge: Badge,
    pub count_text: String,
    pub refresh_text: String,
    pub list: FileList,
    pub content: Option<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileList {
    Entries(Vec<FileEntry>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub owner: String,
    pub path: String,
    pub modified: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub path: String,
    pub content: String,
}

impl Fragment {
    #[must_use]
    pub fn build(data: &WidgetData, mode: &ServingMode, refresh_interval: u64) -> Self {
        let list = if data.files.files.is_empty() {
            FileList::Empty
        } else {
            FileList::Entries(
                data.files
                    .files
                    .iter()
                    .map(|f| FileEntry {
                        // Serde only defaults a missing owner; payloads can still carry `"owner": ""`.
                        owner: if f.owner.is_empty() {
                            UNKNOWN_OWNER.to_string()
                        } else {
                            f.owner.clone()
                        },
                        path: f.path.clone(),
                        modified: f.modified.clone(),
                        size: f.size,
                    })
                    .collect(),
            )
        };

        let content = data.content.displayable().map(|(path, content)| ContentBlock {
            path: path.to_string(),
            content: content.to_string(),
        });

        Self {
            badge: Badge::for_mode(mode),
            count_text: count_text(data.files.total_count),
            refresh_text: refresh_text(refresh_interval),
            list,
            content,
        }
    }
}

#[must_use]
pub(crate) fn count_text(total_count: usize) -> String {
    let noun = if total_count == 1 { "file" } else { "files" };
    format!("Found {total_count} happybird.txt {noun}")
}

#[must_use]
pub(crate) fn refresh_text(refresh_interval: u64) -> String {
    format!("Auto-refreshing every {refresh_interval} seconds")
}
