//! Output directory layout.

use std::path::{Path, PathBuf};

/// Name of the unit summary file.
pub const UNIT_FILENAME: &str = "_unit.yml";

/// Output directory for an input file: the input path without its extension,
/// resolved against `root`.
///
/// Only a purely alphabetic extension is stripped, so `unit.v2` keeps its
/// suffix. An absolute `input` replaces `root`.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use unitsplit::export::output_dir_for;
///
/// let dir = output_dir_for(Path::new("/work"), Path::new("units/fractions.yml"));
/// assert_eq!(dir, PathBuf::from("/work/units/fractions"));
/// ```
pub fn output_dir_for(root: &Path, input: &Path) -> PathBuf {
    let mut dir = input.to_path_buf();
    let strip = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphabetic()));
    if strip {
        dir.set_extension("");
    }
    root.join(dir)
}
