//! HappyBird Watcher: finds `happybird.txt` files in a SyftBox folder tree and
//! renders them as an auto-refreshing widget.
//!
//! The workspace crates are re-exported under short module names.

pub use happybird_app as app;
pub use happybird_config as config;
pub use happybird_core as core;
pub use happybird_models as models;
pub use happybird_ui as ui;
pub use happybird_utils as utils;
