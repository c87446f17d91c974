use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{entry::Entry, error::CleanerError};

/// Reads the whole dictionary into memory. A leading byte order mark is ignored.
///
/// # Errors
/// `InputRead` if the file cannot be read, `InputParse` if it is not a JSON
/// array of objects.
pub fn load(path: &Path) -> Result<Vec<Entry>, CleanerError> {
    tracing::info!("Loading dictionary from {:?}", path);
    let raw = fs::read_to_string(path)
        .map_err(|source| CleanerError::InputRead { path: path.to_path_buf(), source })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    serde_json::from_str(raw)
        .map_err(|source| CleanerError::InputParse { path: path.to_path_buf(), source })
}

/// Writes `entries` as four-space indented JSON. The file is written next to
/// `path` first and renamed into place, so `path` never holds a partial write.
///
/// # Errors
/// `OutputEncode` if serialization fails, `OutputWrite` for any filesystem error.
pub fn save(path: &Path, entries: &[Entry]) -> Result<(), CleanerError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut ser).map_err(CleanerError::OutputEncode)?;

    let tmp_path = tmp_path_for(path);
    let written = fs::write(&tmp_path, &buf).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = written {
        if tmp_path.exists() {
            if let Err(cleanup_err) = fs::remove_file(&tmp_path) {
                tracing::warn!("Failed to remove temp file {:?}: {}", tmp_path, cleanup_err);
            }
        }
        return Err(CleanerError::OutputWrite { path: path.to_path_buf(), source });
    }

    tracing::info!("Wrote {} entries to {:?}", entries.len(), path);
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn load_reads_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, r#"[{"english":"sun","nicobarese":"tâwūˑe"},{"english":"moon"}]"#)
            .unwrap();

        let entries = load(&path).unwrap();

        assert_that!(entries, len(eq(2)));
        assert_that!(entries[0].nicobarese(), eq("tâwūˑe"));
        assert_that!(entries[1].nicobarese(), eq(""));
    }

    #[rstest]
    fn load_skips_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, "\u{feff}[{\"english\":\"eye\",\"nicobarese\":\"Mat\"}]").unwrap();

        let entries = load(&path).unwrap();

        assert_that!(entries[0].english(), eq("eye"));
    }

    #[rstest]
    fn load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();

        let result = load(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(CleanerError::InputRead { .. })));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::object(r#"{"english":"eye"}"#)]
    #[case::array_of_strings(r#"["eye"]"#)]
    fn load_rejects_wrong_shape(#[case] content: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, content).unwrap();

        let result = load(&path);

        assert!(matches!(result, Err(CleanerError::InputParse { .. })));
    }

    #[rstest]
    fn save_pretty_prints_and_keeps_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cleaned.json");
        let entries: Vec<Entry> =
            serde_json::from_value(json!([{"english": "sand", "nicobarese": "Kūyàyö"}])).unwrap();

        save(&path, &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(
            written,
            eq("[\n    {\n        \"english\": \"sand\",\n        \"nicobarese\": \"Kūyàyö\"\n    }\n]")
        );
        assert!(!tmp_path_for(&path).exists());
    }

    #[rstest]
    fn save_replaces_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cleaned.json");
        fs::write(&path, "stale").unwrap();

        save(&path, &[]).unwrap();

        assert_that!(fs::read_to_string(&path).unwrap(), eq("[]"));
    }

    #[rstest]
    fn save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cleaned.json");

        let result = save(&path, &[]);

        assert!(matches!(result, Err(CleanerError::OutputWrite { .. })));
        assert!(!path.exists());
    }

    #[rstest]
    fn saved_output_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cleaned.json");
        let entries: Vec<Entry> = serde_json::from_value(json!([
            {"english": "foot", "nicobarese": "A", "note": "variant"},
        ]))
        .unwrap();

        save(&path, &entries).unwrap();

        assert_eq!(load(&path).unwrap(), entries);
    }

    #[rstest]
    #[case::big_integer("12345678901234567890123")]
    #[case::trailing_zero("1.50")]
    fn extra_numbers_are_written_back_exactly(#[case] number: &str) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("dictionary.json");
        let output = dir.path().join("cleaned.json");
        fs::write(&input, format!(r#"[{{"english":"eye","nicobarese":"Mat","id":{number}}}]"#))
            .unwrap();

        save(&output, &load(&input).unwrap()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_that!(written, contains_substring(format!("\"id\": {number}")));
    }
}
