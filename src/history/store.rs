use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::averager::parse_sample;
use super::error::HistoryError;
use super::key::HistoryKey;

/// Persistent sample history keyed by queue identity. Samples are stored
/// newest first.
pub trait HistoryStore {
    fn load(&self, key: &HistoryKey) -> Result<Vec<u64>, HistoryError>;
    fn save(&self, key: &HistoryKey, samples: &[u64]) -> Result<(), HistoryError>;
}

/// One plain-text file per key under a directory that must already exist.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &HistoryKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self, key: &HistoryKey) -> Result<Vec<u64>, HistoryError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        Ok(parse_history(&path, &raw))
    }

    fn save(&self, key: &HistoryKey, samples: &[u64]) -> Result<(), HistoryError> {
        let path = self.path_for(key);
        let staging = self.dir.join(format!(".{}.tmp", key.file_name()));
        let write_error = |source: std::io::Error| HistoryError::Write {
            path: path.display().to_string(),
            source,
        };

        let mut contents = String::new();
        for sample in samples {
            contents.push_str(&sample.to_string());
            contents.push('\n');
        }

        let mut file = File::create(&staging).map_err(write_error)?;
        file.write_all(contents.as_bytes()).map_err(write_error)?;
        drop(file);

        if let Err(source) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(write_error(source));
        }

        log::debug!(
            "sample_history_saved path={} samples={}",
            path.display(),
            samples.len()
        );
        Ok(())
    }
}

fn parse_history(path: &Path, raw: &str) -> Vec<u64> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_sample(line) {
            Ok(sample) => Some(sample),
            Err(_) => {
                log::warn!(
                    "sample_history_line_skipped path={} line={:?}",
                    path.display(),
                    line
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<HistoryKey, Vec<u64>>>,
}

#[cfg(test)]
impl MemoryHistoryStore {
    pub fn with_entry(key: &HistoryKey, samples: Vec<u64>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.clone(), samples);
        store
    }

    pub fn entry(&self, key: &HistoryKey) -> Option<Vec<u64>> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl HistoryStore for MemoryHistoryStore {
    fn load(&self, key: &HistoryKey) -> Result<Vec<u64>, HistoryError> {
        Ok(self.entry(key).unwrap_or_default())
    }

    fn save(&self, key: &HistoryKey, samples: &[u64]) -> Result<(), HistoryError> {
        self.entries.borrow_mut().insert(key.clone(), samples.to_vec());
        Ok(())
    }
}
