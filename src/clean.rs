use std::collections::{HashMap, HashSet};

use itertools::{Either, Itertools};

use crate::entry::{Entry, RemovalNote, RemovalReason};

/// Survivors and removal notes, each in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cleaned {
    pub kept: Vec<Entry>,
    pub removed: Vec<RemovalNote>,
}

/// Drops empty/dash translations and any translation that is not the canonical
/// one for its headword. Entries are moved, never modified.
pub fn clean(
    entries: Vec<Entry>,
    canonical: &HashMap<String, String>,
    exempt: &HashSet<String>,
) -> Cleaned {
    let (kept, removed) = entries.into_iter().partition_map(|entry| {
        match verdict(&entry, canonical, exempt) {
            None => Either::Left(entry),
            Some(reason) => Either::Right(RemovalNote::new(&entry, reason)),
        }
    });
    Cleaned { kept, removed }
}

fn verdict(
    entry: &Entry,
    canonical: &HashMap<String, String>,
    exempt: &HashSet<String>,
) -> Option<RemovalReason> {
    let english = entry.english().trim().to_lowercase();
    let nicobarese = entry.nicobarese().trim();

    if nicobarese.is_empty() || nicobarese == "-" {
        return Some(RemovalReason::EmptyOrDash);
    }
    if let Some(kept) = canonical.get(&english) {
        return (nicobarese != kept.as_str())
            .then(|| RemovalReason::Superseded { kept: kept.clone() });
    }
    if exempt.contains(&english) {
        tracing::trace!(%english, "keeping exempt duplicate");
    }
    None
}
