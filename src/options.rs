//! Split options and configuration.

use std::path::PathBuf;

/// Default number of characters kept from a slugified `questions` prompt.
pub const DEFAULT_SLUG_LEN: usize = 20;

/// Default `count` above which the hint moves from the body to the outline.
pub const DEFAULT_COUNT_THRESHOLD: f64 = 2.0;

/// Options for splitting a unit file.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Directory input paths and output directories are resolved against
    pub base_dir: PathBuf,

    /// Maximum length of a file name derived from the `questions` prompt
    pub slug_len: usize,

    /// `count` values strictly greater than this are moved into the outline
    pub count_threshold: f64,
}

impl SplitOptions {
    /// Create new split options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the maximum length of prompt-derived file names.
    pub fn with_slug_len(mut self, len: usize) -> Self {
        self.slug_len = len;
        self
    }

    /// Set the `count` threshold.
    pub fn with_count_threshold(mut self, threshold: f64) -> Self {
        self.count_threshold = threshold;
        self
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            slug_len: DEFAULT_SLUG_LEN,
            count_threshold: DEFAULT_COUNT_THRESHOLD,
        }
    }
}
