//! File size lookup used while building the graph.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the on-disk size of a file named in a trace
pub trait FileSizer {
    fn file_size(&self, path: &str) -> io::Result<u64>;
}

impl<F> FileSizer for F
where
    F: Fn(&str) -> io::Result<u64>,
{
    fn file_size(&self, path: &str) -> io::Result<u64> {
        self(path)
    }
}

/// Pre-recorded sizes, keyed by the path as written in the trace
#[derive(Debug, Clone, Default)]
pub struct RecordedSizes(pub HashMap<String, u64>);

impl<K: Into<String>> FromIterator<(K, u64)> for RecordedSizes {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(path, size)| (path.into(), size)).collect())
    }
}

impl FileSizer for RecordedSizes {
    fn file_size(&self, path: &str) -> io::Result<u64> {
        self.0.get(path).copied().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no size recorded for {}", path))
        })
    }
}

/// Reads sizes from the filesystem
#[derive(Debug, Clone, Default)]
pub struct DiskSizer {
    base_dir: Option<PathBuf>,
}

impl DiskSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative trace paths against `base_dir` instead of the
    /// current directory (the compiler's working directory)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FileSizer for DiskSizer {
    fn file_size(&self, path: &str) -> io::Result<u64> {
        Ok(fs::metadata(self.resolve(path))?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_disk_sizer_with_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("config.h")).unwrap();
        file.write_all(b"#pragma once\n").unwrap();

        let sizer = DiskSizer::with_base_dir(dir.path());
        assert_eq!(sizer.file_size("config.h").unwrap(), 13);
        assert!(sizer.file_size("missing.h").is_err());
    }

    #[test]
    fn test_recorded_sizes() {
        let sizes: RecordedSizes = [("a.h", 42)].into_iter().collect();
        assert_eq!(sizes.file_size("a.h").unwrap(), 42);
        assert_eq!(
            sizes.file_size("b.h").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
