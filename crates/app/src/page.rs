//! Standalone HTML pages wrapping the widget fragment.

use happybird_models::ServingMode;
use happybird_ui::{HappyBirdWatcher, TITLE, escape_html};
use serde_json::Value;

/// DOM id of the element hosting `watcher`.
#[must_use]
pub fn element_id(watcher: &HappyBirdWatcher) -> String {
    format!("happybird-{}", watcher.id())
}

/// Page for a one-shot render. Only the click handler is installed.
#[must_use]
pub fn snapshot_page(watcher: &HappyBirdWatcher, body: &str) -> String {
    document(watcher, body, &watcher.handler_script())
}

/// Page served over HTTP. Polls the widget's endpoints every refresh interval
/// and hands the payloads to the update script.
#[must_use]
pub fn live_page(watcher: &HappyBirdWatcher, body: &str, mode: &ServingMode) -> String {
    document(watcher, body, &host_loop(watcher, mode))
}

fn document(watcher: &HappyBirdWatcher, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<div id="{element}">{body}</div>
<script>
{script}</script>
</body>
</html>
"#,
        title = escape_html(TITLE),
        element = element_id(watcher),
    )
}

// JSON literal that cannot close the surrounding <script> element.
fn script_literal(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

fn host_loop(watcher: &HappyBirdWatcher, mode: &ServingMode) -> String {
    let endpoints = Value::from(
        watcher
            .endpoints()
            .iter()
            .map(|e| Value::from(e.path()))
            .collect::<Vec<_>>(),
    );
    let interval_ms = watcher.refresh_interval().saturating_mul(1000);

    format!(
        r#"{handler}(function () {{
const element = document.getElementById({element});
const endpoints = {endpoints};
const serverType = {mode};
function update(currentData, currentServerType, element) {{
{update}}}
async function refresh() {{
const currentData = {{}};
for (const path of endpoints) {{
const response = await fetch(path);
currentData[path] = await response.json();
}}
update(currentData, serverType, element);
}}
setInterval(() => refresh().catch((err) => console.error('HappyBird refresh failed:', err)), {interval_ms});
}})();
"#,
        handler = watcher.handler_script(),
        element = script_literal(&Value::from(element_id(watcher))),
        endpoints = script_literal(&endpoints),
        mode = script_literal(&Value::from(mode.tag())),
        update = watcher.update_script(),
    )
}
