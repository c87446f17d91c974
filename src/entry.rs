use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One english → nicobarese record, kept as the raw JSON object so that any
/// extra fields survive the round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    pub fn english(&self) -> &str {
        self.text("english")
    }

    pub fn nicobarese(&self) -> &str {
        self.text("nicobarese")
    }

    // missing or non-string fields read as empty
    fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalReason {
    EmptyOrDash,
    /// Another translation is the accepted one for this headword.
    Superseded { kept: String },
}

/// Why a single entry was dropped, with its values as they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalNote {
    pub english: String,
    pub nicobarese: String,
    pub reason: RemovalReason,
}

impl RemovalNote {
    pub fn new(entry: &Entry, reason: RemovalReason) -> Self {
        Self {
            english: entry.english().to_string(),
            nicobarese: entry.nicobarese().to_string(),
            reason,
        }
    }
}

impl fmt::Display for RemovalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nicobarese = self.nicobarese.trim();
        match &self.reason {
            RemovalReason::EmptyOrDash => {
                write!(f, "Removed: {} → '{nicobarese}' (empty/dash)", self.english)
            }
            RemovalReason::Superseded { kept } => {
                write!(f, "Removed: {} → {nicobarese} (keeping: {kept})", self.english)
            }
        }
    }
}
