//! HTML templates for the widget panel.
//!
//! Each template takes its dynamic parts as already-prepared strings. The initial
//! render fills them with escaped values; the refresh script fills them with
//! JavaScript interpolations, so both paths share one copy of the markup.

use crate::{FileList, Fragment, WidgetId, escape_html};

pub const TITLE: &str = "🐦 HappyBird Watcher";
pub const EMPTY_STATE_MESSAGE: &str = "No happybird.txt files found in SyftBox filesystem";
const EMPTY_STATE_HINT: &str = "Files will appear here when users create happybird.txt in their SyftBox folders";

const PANEL_STYLE: &str =
    "font-family: -apple-system, sans-serif; padding: 20px; background: #f8f9fa; border-radius: 8px; position: relative; min-height: 300px;";
const BADGE_STYLE: &str =
    "position: absolute; top: 10px; right: 10px; color: white; padding: 4px 8px; border-radius: 4px; font-size: 12px;";
const BANNER_STYLE: &str =
    "background: #e3f2fd; padding: 10px 15px; border-radius: 4px; margin-bottom: 20px; border-left: 4px solid #2196f3;";
const ENTRY_STYLE: &str = "padding: 10px; margin: 5px 0; background: white; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; transition: all 0.2s;";
const PRE_STYLE: &str = "background: #f8f9fa; padding: 15px; border-radius: 4px; overflow-x: auto; white-space: pre-wrap; word-wrap: break-word; border: 1px solid #dee2e6; font-family: monospace; font-size: 14px;";

pub(crate) struct PanelSlots<'a> {
    pub badge_color: &'a str,
    pub badge_label: &'a str,
    pub count_text: &'a str,
    pub refresh_text: &'a str,
    pub list: &'a str,
    pub content: &'a str,
}

pub(crate) struct EntrySlots<'a> {
    pub path: &'a str,
    pub owner: &'a str,
    pub modified: &'a str,
    pub size: &'a str,
}

pub(crate) fn panel(s: &PanelSlots<'_>) -> String {
    format!(
        r#"<div style="{PANEL_STYLE}">
<div style="{BADGE_STYLE} background: {badge_color};">{badge_label}</div>
<h3 style="margin: 0 0 20px 0; color: #333;">{TITLE}</h3>
<div style="{BANNER_STYLE}">
<div style="font-weight: bold; color: #1976d2;">{count_text}</div>
<div style="font-size: 12px; color: #666; margin-top: 4px;">{refresh_text}</div>
</div>
<div style="max-height: 300px; overflow-y: auto;">{list}</div>
{content}</div>"#,
        badge_color = s.badge_color,
        badge_label = s.badge_label,
        count_text = s.count_text,
        refresh_text = s.refresh_text,
        list = s.list,
        content = s.content,
    )
}

pub(crate) fn entry(handler: &str, s: &EntrySlots<'_>) -> String {
    format!(
        r#"<div data-path="{path}" onclick="window.{handler}(this.dataset.path)" style="{ENTRY_STYLE}" onmouseover="this.style.background='#f0f0f0'" onmouseout="this.style.background='white'">
<div style="font-weight: bold; color: #333;">🐦 {owner}</div>
<div style="font-size: 12px; color: #666; margin-top: 4px;">Modified: {modified} | Size: {size} bytes</div>
</div>"#,
        path = s.path,
        owner = s.owner,
        modified = s.modified,
        size = s.size,
    )
}

pub(crate) fn empty_state() -> String {
    format!(
        r#"<div style="padding: 20px; text-align: center; color: #666;">
<div style="font-size: 48px; margin-bottom: 10px;">🔍</div>
<div>{EMPTY_STATE_MESSAGE}</div>
<div style="font-size: 12px; margin-top: 10px;">{EMPTY_STATE_HINT}</div>
</div>"#
    )
}

pub(crate) fn content_block(path: &str, content: &str) -> String {
    format!(
        r#"<div style="margin-top: 20px;">
<h4 style="margin: 0 0 10px 0; color: #333;">Content of {path}:</h4>
<pre style="{PRE_STYLE}">{content}</pre>
</div>"#
    )
}

/// Renders the full panel markup for `fragment`.
#[must_use]
pub fn render(fragment: &Fragment, id: &WidgetId) -> String {
    let list = match &fragment.list {
        FileList::Entries(entries) => {
            let handler = id.handler_name();
            entries
                .iter()
                .map(|e| {
                    entry(
                        &handler,
                        &EntrySlots {
                            path: &escape_html(&e.path),
                            owner: &escape_html(&e.owner),
                            modified: &escape_html(&e.modified),
                            size: &e.size.to_string(),
                        },
                    )
                })
                .collect::<String>()
        }
        FileList::Empty => empty_state(),
    };

    let content = fragment
        .content
        .as_ref()
        .map(|block| content_block(&escape_html(&block.path), &escape_html(&block.content)))
        .unwrap_or_default();

    panel(&PanelSlots {
        badge_color: fragment.badge.color,
        badge_label: &escape_html(&fragment.badge.label),
        count_text: &escape_html(&fragment.count_text),
        refresh_text: &escape_html(&fragment.refresh_text),
        list: &list,
        content: &content,
    })
}
