use happybird_models::{Endpoint, ServingMode};
use serde_json::{Map, Value};

use crate::badge::{Badge, NEUTRAL_COLOR};
use crate::fragment::refresh_text;
use crate::markup::{self, EntrySlots, PanelSlots};
use crate::{WidgetId, escape_html};

// Interpolations the script substitutes into the shared templates.
pub(crate) const JS_PATH: &str = "${esc(path)}";
pub(crate) const JS_OWNER: &str = "${esc(owner)}";
pub(crate) const JS_MODIFIED: &str = "${esc(modified)}";
pub(crate) const JS_SIZE: &str = "${esc(size)}";
pub(crate) const JS_BADGE_COLOR: &str = "${badgeColor}";
pub(crate) const JS_BADGE_LABEL: &str = "${esc(serverLabel)}";
pub(crate) const JS_COUNT_TEXT: &str = "${esc(countText)}";
pub(crate) const JS_LIST: &str = "${fileListHtml}";
pub(crate) const JS_CONTENT: &str = "${contentHtml}";
pub(crate) const JS_SELECTED_FILE: &str = "${esc(selectedFile)}";
pub(crate) const JS_FILE_CONTENT: &str = "${esc(fileContent)}";

pub(crate) fn entry_template(id: &WidgetId) -> String {
    markup::entry(
        &id.handler_name(),
        &EntrySlots {
            path: JS_PATH,
            owner: JS_OWNER,
            modified: JS_MODIFIED,
            size: JS_SIZE,
        },
    )
}

pub(crate) fn content_template() -> String {
    markup::content_block(JS_SELECTED_FILE, JS_FILE_CONTENT)
}

pub(crate) fn panel_template(refresh_interval: u64) -> String {
    markup::panel(&PanelSlots {
        badge_color: JS_BADGE_COLOR,
        badge_label: JS_BADGE_LABEL,
        count_text: JS_COUNT_TEXT,
        refresh_text: &escape_html(&refresh_text(refresh_interval)),
        list: JS_LIST,
        content: JS_CONTENT,
    })
}

fn badge_tables() -> (String, String) {
    let mut colors = Map::new();
    let mut labels = Map::new();
    for mode in ServingMode::KNOWN {
        let badge = Badge::for_mode(&mode);
        colors.insert(mode.tag().to_string(), Value::from(badge.color));
        labels.insert(mode.tag().to_string(), Value::from(badge.label));
    }
    (Value::Object(colors).to_string(), Value::Object(labels).to_string())
}

/// Defines the widget's global click handler. Selection is not wired to the
/// content endpoint yet, so the handler only logs.
#[must_use]
pub fn handler_script(id: &WidgetId) -> String {
    format!(
        "window.{handler} = function (filepath) {{\n    console.log('File selected:', filepath);\n}};\n",
        handler = id.handler_name()
    )
}

/// Script run by the host on every refresh.
///
/// Expects `currentData` (endpoint payloads keyed by path), `currentServerType`
/// and `element` in scope, and rebuilds the same markup as [`markup::render`].
#[must_use]
pub fn update_script(id: &WidgetId, refresh_interval: u64) -> String {
    let (colors, labels) = badge_tables();
    let mut script = String::new();

    script.push_str("(function () {\n");
    script.push_str(
        "const esc = (value) => String(value).replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;').replace(/\"/g, '&quot;').replace(/'/g, '&#39;');\n",
    );
    script.push_str(&format!(
        "const filesData = currentData['{}'] || {{}};\n",
        Endpoint::Files.path()
    ));
    script.push_str("const files = filesData.files || [];\n");
    script.push_str("const totalCount = filesData.total_count || 0;\n");
    script.push_str(&format!(
        "const contentData = currentData['{}'] || {{}};\n",
        Endpoint::Content.path()
    ));
    script.push_str("const selectedFile = contentData.selected_file || '';\n");
    script.push_str("const fileContent = contentData.content || '';\n");

    script.push_str("const mode = currentServerType == null ? 'checkpoint' : String(currentServerType);\n");
    script.push_str(&format!("const badgeColors = {colors};\n"));
    script.push_str(&format!("const serverLabels = {labels};\n"));
    // Own properties only, so tags like "constructor" stay unrecognized.
    script.push_str("const known = (table) => Object.prototype.hasOwnProperty.call(table, mode);\n");
    script.push_str(&format!(
        "const badgeColor = known(badgeColors) ? badgeColors[mode] : '{NEUTRAL_COLOR}';\n"
    ));
    script.push_str("const serverLabel = known(serverLabels) ? serverLabels[mode] : mode;\n");
    script.push_str("const countText = `Found ${totalCount} happybird.txt ${totalCount === 1 ? 'file' : 'files'}`;\n");

    script.push_str("let fileListHtml = '';\n");
    script.push_str("if (files.length > 0) {\n");
    script.push_str("files.forEach((fileInfo) => {\n");
    script.push_str("const path = fileInfo.path || '';\n");
    script.push_str("const owner = fileInfo.owner || 'unknown';\n");
    script.push_str("const modified = fileInfo.modified || '';\n");
    script.push_str("const size = fileInfo.size || 0;\n");
    script.push_str(&format!("fileListHtml += `{}`;\n", entry_template(id)));
    script.push_str("});\n");
    script.push_str("} else {\n");
    script.push_str(&format!("fileListHtml = `{}`;\n", markup::empty_state()));
    script.push_str("}\n");

    script.push_str(&format!(
        "const contentHtml = (selectedFile && fileContent) ? `{}` : '';\n",
        content_template()
    ));
    script.push_str(&format!("element.innerHTML = `{}`;\n", panel_template(refresh_interval)));
    script.push_str(&handler_script(id));
    script.push_str("})();\n");

    script
}
