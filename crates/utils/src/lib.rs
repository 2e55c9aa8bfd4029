mod bytes;
pub mod datetime;
mod path;

pub use bytes::format_bytes;
pub use datetime::{TIMESTAMP_FORMAT, format_timestamp, now_timestamp};
pub use path::{SYFTBOX_DIR_NAME, default_syftbox_path};
