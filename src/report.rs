use std::{fmt, path::Path};

use itertools::Itertools;

use crate::entry::RemovalNote;

/// Console summary of a cleaning run.
#[derive(Debug)]
pub struct Summary<'a> {
    pub original: usize,
    pub removed: &'a [RemovalNote],
    pub kept: usize,
    pub preview_limit: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original entries: {}", self.original)?;
        writeln!(f)?;
        writeln!(f, "Removed {} duplicate entries:", self.removed.len())?;
        for note in self.removed.iter().take(self.preview_limit) {
            writeln!(f, "  - {note}")?;
        }
        if self.removed.len() > self.preview_limit {
            writeln!(f, "  ... and {} more", self.removed.len() - self.preview_limit)?;
        }
        writeln!(f)?;
        write!(f, "Cleaned entries: {}", self.kept)
    }
}

/// Closing lines printed once the output file is in place.
pub fn saved(path: &Path, removed: usize, kept: usize) -> String {
    [
        String::new(),
        format!("Cleaned dictionary saved to: \x1b[92m{}\x1b[m", path.display()),
        format!("Entries removed: {removed}"),
        format!("Entries kept: {kept}"),
    ]
    .iter()
    .join("\n")
}
