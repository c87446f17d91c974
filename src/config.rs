use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use crate::{error::ValidationError, tables};

/// Everything a cleaning run needs. There is no runtime override: the tables
/// ship with the binary and the paths are relative to the working directory.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// How many removal notes the summary lists before "... and N more".
    pub preview_limit: usize,
    pub canonical: HashMap<String, String>,
    pub keep_both: HashSet<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("assets/data/dictionary.json"),
            output_path: PathBuf::from("assets/data/dictionary_cleaned.json"),
            preview_limit: 10,
            canonical: tables::canonical_translations(),
            keep_both: tables::keep_both(),
        }
    }
}

impl Settings {
    /// Checks that every table entry can actually take part in matching.
    ///
    /// # Errors
    /// Returns every problem found, sorted by field path.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (english, nicobarese) in &self.canonical {
            let path = format!("canonical.{english}");
            if let Some(problem) = headword_problem(english) {
                errors.push(ValidationError::new(&path, problem));
            }
            let value = nicobarese.trim();
            if value != nicobarese {
                errors.push(ValidationError::new(&path, "translation has surrounding whitespace"));
            }
            if value.is_empty() || value == "-" {
                errors.push(ValidationError::new(&path, "translation cannot be empty or a dash"));
            }
        }

        for english in &self.keep_both {
            if let Some(problem) = headword_problem(english) {
                errors.push(ValidationError::new(format!("keepBoth.{english}"), problem));
            }
        }

        if self.input_path == self.output_path {
            errors.push(ValidationError::new("outputPath", "must differ from inputPath"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort_by(|a, b| a.field_path.cmp(&b.field_path));
            Err(errors)
        }
    }
}

// keys are compared against trimmed, lowercased headwords
fn headword_problem(english: &str) -> Option<&'static str> {
    if english.trim().is_empty() {
        Some("headword cannot be empty")
    } else if english.trim() != english {
        Some("headword has surrounding whitespace")
    } else if english.to_lowercase() != english {
        Some("headword must be lowercase")
    } else {
        None
    }
}
