mod badge;
mod escape;
mod fragment;
mod markup;
mod script;
mod widget;
mod widget_id;

pub use badge::{Badge, NEUTRAL_COLOR};
pub use escape::escape_html;
pub use fragment::{ContentBlock, FileEntry, FileList, Fragment};
pub use markup::{EMPTY_STATE_MESSAGE, TITLE, render};
pub use script::{handler_script, update_script};
pub use widget::HappyBirdWatcher;
pub use widget_id::WidgetId;
