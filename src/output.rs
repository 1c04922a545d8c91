//! Output directory management and collision-free file naming.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory that conversion results are written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    /// Use `dir` as the output directory, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// First unused path among `stem.ext`, `stem_1.ext`, `stem_2.ext`, …
    ///
    /// The check is a point-in-time existence test; callers running
    /// conversions concurrently must not share a stem.
    pub fn unique_path(&self, stem: &str, extension: &str) -> PathBuf {
        let candidate = self.dir.join(format!("{}.{}", stem, extension));
        if !candidate.exists() {
            return candidate;
        }

        (1u64..)
            .map(|n| self.dir.join(format!("{}_{}.{}", stem, n, extension)))
            .find(|path| !path.exists())
            .unwrap_or(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("output");
        let output = OutputDir::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(output.path(), dir);
    }

    #[test]
    fn test_unique_path_unused_name() {
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputDir::new(tmp.path()).unwrap();
        assert_eq!(
            output.unique_path("converted_file", "pdf"),
            tmp.path().join("converted_file.pdf")
        );
    }

    #[test]
    fn test_unique_path_appends_smallest_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputDir::new(tmp.path()).unwrap();

        let mut seen = Vec::new();
        for _ in 0..4 {
            let path = output.unique_path("converted_file", "json");
            assert!(!path.exists());
            assert!(!seen.contains(&path));
            fs::write(&path, b"{}").unwrap();
            seen.push(path);
        }

        let names: Vec<_> = seen
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "converted_file.json",
                "converted_file_1.json",
                "converted_file_2.json",
                "converted_file_3.json",
            ]
        );
    }

    #[test]
    fn test_unique_path_fills_gap() {
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputDir::new(tmp.path()).unwrap();
        fs::write(tmp.path().join("out.pdf"), b"x").unwrap();
        fs::write(tmp.path().join("out_2.pdf"), b"x").unwrap();
        assert_eq!(
            output.unique_path("out", "pdf"),
            tmp.path().join("out_1.pdf")
        );
    }

    #[test]
    fn test_unique_path_other_extension_independent() {
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputDir::new(tmp.path()).unwrap();
        fs::write(tmp.path().join("out.pdf"), b"x").unwrap();
        assert_eq!(
            output.unique_path("out", "json"),
            tmp.path().join("out.json")
        );
    }
}
