use crate::constants;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Immutable run configuration: the project root plus every include/exclude
/// list the filter, walker and emitter consult.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output_filename: String,
    pub scan_directories: Vec<PathBuf>,
    pub important_files: Vec<PathBuf>,
    /// Lowercase, without the leading dot.
    pub relevant_extensions: Vec<String>,
    pub ignored_dirs: Vec<String>,
    pub ignored_files: Vec<String>,
    pub ignored_file_patterns: Vec<String>,
    pub language_hints: HashMap<String, String>,
}

impl Config {
    /// Default project layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config {
            root: root.into(),
            output_filename: constants::OUTPUT_FILENAME.to_string(),
            scan_directories: constants::SCAN_DIRECTORIES
                .iter()
                .map(PathBuf::from)
                .collect(),
            important_files: constants::IMPORTANT_FILES
                .iter()
                .map(PathBuf::from)
                .collect(),
            relevant_extensions: to_strings(constants::RELEVANT_EXTENSIONS),
            ignored_dirs: to_strings(constants::IGNORED_DIRS),
            ignored_files: to_strings(constants::IGNORED_FILES),
            ignored_file_patterns: to_strings(constants::IGNORED_FILE_PATTERNS),
            language_hints: constants::LANGUAGE_HINTS
                .iter()
                .map(|(ext, hint)| (ext.to_string(), hint.to_string()))
                .collect(),
        }
    }

    /// Default layout rooted at the canonicalized current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let root = dunce::canonicalize(&cwd)
            .with_context(|| format!("cannot resolve project root {}", cwd.display()))?;
        Ok(Self::new(root))
    }

    /// Location of the generated document.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_filename)
    }

    pub fn resolve(
        &self,
        relative: &Path,
    ) -> PathBuf {
        self.root.join(relative)
    }

    /// Case-insensitive allow-list check on a file extension (no dot).
    pub fn is_relevant_extension(
        &self,
        ext: &str,
    ) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.relevant_extensions.iter().any(|e| *e == ext)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
