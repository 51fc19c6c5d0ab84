use crate::model::{DeedRecord, StorageError};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// The records file is the only persistence: a headered CSV that each
/// run merges into, deduplicated on the full row.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Loads the existing records file; a missing file is an empty set.
    pub fn load(&self) -> Result<Vec<DeedRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    /// Appends `fresh` to the stored rows, drops exact duplicates
    /// keeping first-seen order, and writes the file back. Returns the
    /// total row count after the merge.
    pub fn merge_and_save(&self, fresh: Vec<DeedRecord>) -> Result<usize, StorageError> {
        let mut all = self.load()?;
        all.extend(fresh);

        let mut seen = HashSet::new();
        all.retain(|r| seen.insert((r.county.clone(), r.detail_url.clone(), r.pdf_url.clone())));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(["county", "detail_url", "pdf_url"])?;
        for record in &all {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(all.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(county: &str, detail: &str, pdf: &str) -> DeedRecord {
        DeedRecord {
            county: county.to_string(),
            detail_url: detail.to_string(),
            pdf_url: pdf.to_string(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("records.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn merge_dedups_on_full_row_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("out/records.csv"));

        let a = record("Essex", "https://x/d1", "https://x/1.pdf");
        let b = record("Essex", "https://x/d2", "");
        let c = record("Suffolk", "https://x/d3", "https://x/3.pdf");

        store.merge_and_save(vec![a.clone(), b.clone()]).unwrap();
        let total = store.merge_and_save(vec![b.clone(), c.clone()]).unwrap();

        assert_eq!(total, 3);
        assert_eq!(store.load().unwrap(), vec![a, b, c]);
    }

    #[test]
    fn same_detail_with_different_pdf_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("records.csv"));

        let a = record("Essex", "https://x/d1", "https://x/1.pdf");
        let b = record("Essex", "https://x/d1", "https://x/1-amended.pdf");

        let total = store.merge_and_save(vec![a, b]).unwrap();
        assert_eq!(total, 2);
    }

    #[test]
    fn empty_merge_writes_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let store = CsvStore::new(path.clone());

        store.merge_and_save(Vec::new()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.trim_end(), "county,detail_url,pdf_url");
    }
}
