#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)] // For comparing floats in tests
#![allow(clippy::panic)]

mod endpoints;
mod render;
mod scanner;

use color_eyre::Result;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Create `root/<rel>` holding `size` bytes, with its mtime set `age_secs` in the past.
pub fn create_happybird(root: &Path, rel: &str, size: usize, age_secs: u64) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, vec![b'x'; size])?;

    let file = std::fs::File::options().write(true).open(&path)?;
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))?;
    Ok(())
}
