//! Renderer load target.
//!
//! The renderer entry point is a local file; its URL carries the window id as
//! the query string so the renderer knows which window it belongs to.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use url::Url;

/// Headers sent with the renderer load to keep it out of any cache.
pub const NO_CACHE_HEADERS: &str = "pragma: no-cache\n";

/// What the window loads as its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererTarget {
    pub url: Url,
    pub extra_headers: String,
}

impl RendererTarget {
    /// Build the target for `entry` and window `window_id`. Relative entry
    /// paths resolve against the current directory.
    pub fn new(entry: &Path, window_id: u64) -> Result<Self> {
        let absolute = if entry.is_absolute() {
            entry.to_path_buf()
        } else {
            std::env::current_dir()?.join(entry)
        };
        let mut url = Url::from_file_path(&absolute)
            .map_err(|()| anyhow!("Cannot build a file URL from {:?}", absolute))?;
        url.set_query(Some(&window_id.to_string()));
        Ok(Self {
            url,
            extra_headers: NO_CACHE_HEADERS.to_string(),
        })
    }

    /// The window id encoded in the URL query.
    pub fn window_id(url: &Url) -> Option<u64> {
        url.query()?.parse().ok()
    }
}

/// Default renderer entry: `dist/index.html` next to the executable.
pub fn default_entry() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dist")
        .join("index.html")
}
