use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CatalogError;

/// The complete relative-path → content-hash mapping for one run.
///
/// Entries are kept in an ordered map, so serializing an unchanged tree
/// yields a byte-identical document regardless of traversal order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry. A repeated key is last-write-wins; a well-formed
    /// traversal never produces one.
    pub fn insert(&mut self, key: String, digest: String) {
        self.entries.insert(key, digest);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Render the document: a flat, pretty-printed JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Write the document to `path`, replacing any prior document there.
    ///
    /// The bytes go to a temp file in the destination directory first and
    /// are renamed into place, so a partial catalog is never visible.
    pub fn write(&self, path: &Path) -> Result<(), CatalogError> {
        let serialization = |source: std::io::Error| CatalogError::Serialization {
            path: path.to_path_buf(),
            source,
        };

        let rendered = self.to_json().map_err(|e| serialization(e.into()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| serialization(e))?;
        tmp.write_all(rendered.as_bytes()).map_err(|e| serialization(e))?;
        tmp.persist(path).map_err(|e| serialization(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn insert_is_last_write_wins() {
        let mut catalog = Catalog::new();
        catalog.insert("A/a.mp3".into(), "aaaa".into());
        catalog.insert("A/a.mp3".into(), "bbbb".into());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A/a.mp3"), Some("bbbb"));
    }

    #[test]
    fn to_json_emits_keys_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert("b.mp3".into(), "2222".into());
        catalog.insert("a.mp3".into(), "1111".into());

        let json = catalog.to_json().unwrap();
        assert!(json.find("a.mp3").unwrap() < json.find("b.mp3").unwrap());
    }

    #[test]
    fn empty_catalog_serializes_to_empty_object() {
        assert_eq!(Catalog::new().to_json().unwrap(), "{}");
    }

    #[test]
    fn write_produces_a_parsable_document_and_overwrites_prior_runs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("metadata.json");
        fs::write(&out, "stale junk from a previous run").unwrap();

        let mut catalog = Catalog::new();
        catalog.insert("A/a1.mp3".into(), "00ff".into());
        catalog.write(&out).unwrap();

        let parsed: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["A/a1.mp3"], "00ff");
    }

    #[test]
    fn write_into_missing_directory_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("no-such-dir").join("metadata.json");
        let err = Catalog::new().write(&out).unwrap_err();
        assert!(err.to_string().contains("metadata.json"));
    }
}
