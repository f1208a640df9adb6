use crate::config::Config;
use crate::context::filter::Filter;
use crate::context::markdown;
use crate::context::walker;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use path_slash::PathExt;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to a single file handed to [`Emitter::emit_file`].
#[derive(Debug)]
pub enum EmitOutcome {
    Appended,
    NotFound,
    Ignored,
    Unreadable(io::Error),
    /// Already written earlier in this run.
    Duplicate,
}

impl EmitOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, EmitOutcome::Appended)
    }
}

/// Totals for one generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub files: usize,
    pub content_bytes: usize,
}

/// Streams file blocks into the output document, remembering which files
/// were already written so none appears twice.
pub struct Emitter<'a, W: Write> {
    config: &'a Config,
    filter: &'a Filter,
    out: W,
    processed: HashSet<PathBuf>,
    stats: EmitStats,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(
        config: &'a Config,
        filter: &'a Filter,
        out: W,
    ) -> Self {
        Emitter {
            config,
            filter,
            out,
            processed: HashSet::new(),
            stats: EmitStats::default(),
        }
    }

    /// Header, important files, walked files, footer. Per-file problems are
    /// logged and skipped; only a failed write to `out` is returned.
    pub fn run(
        mut self,
        generated_at: &DateTime<Local>,
    ) -> Result<(W, EmitStats)> {
        self.write(&markdown::document_header(generated_at))?;
        self.emit_important_files()?;
        self.emit_walked_files()?;
        self.write(markdown::document_footer())?;
        self.out.flush().context("failed to flush output document")?;
        Ok((self.out, self.stats))
    }

    fn emit_important_files(&mut self) -> Result<()> {
        self.write(&markdown::section_heading(markdown::CONFIG_SECTION))?;
        let config = self.config;
        for rel in &config.important_files {
            self.process(&config.resolve(rel))?;
        }
        Ok(())
    }

    fn emit_walked_files(&mut self) -> Result<()> {
        self.write(&markdown::section_heading(markdown::SOURCE_SECTION))?;
        let config = self.config;
        let filter = self.filter;
        for rel_dir in &config.scan_directories {
            let scan_dir = config.resolve(rel_dir);
            if !scan_dir.is_dir() {
                info!(
                    "Scan directory not found, skipping: {}",
                    rel_dir.to_slash_lossy()
                );
                continue;
            }
            info!("Scanning directory: {}", rel_dir.to_slash_lossy());
            for path in walker::scan(&scan_dir, filter, config) {
                self.process(&path)?;
            }
        }
        Ok(())
    }

    /// Emits `path` unless an equivalent path was already written, recording
    /// it on success.
    fn process(
        &mut self,
        path: &Path,
    ) -> Result<EmitOutcome> {
        let key = normalize(path);
        if self.processed.contains(&key) {
            debug!("Already processed, skipping: {}", self.relative_path(path));
            return Ok(EmitOutcome::Duplicate);
        }
        let outcome = self.emit_file(path)?;
        if outcome.is_appended() {
            self.processed.insert(key);
        }
        Ok(outcome)
    }

    /// Appends one file block. Missing, ignored and unreadable files are
    /// reported through the outcome; `Err` means the output write failed.
    pub fn emit_file(
        &mut self,
        path: &Path,
    ) -> Result<EmitOutcome> {
        let rel = self.relative_path(path);

        if !path.exists() {
            warn!("File not found, skipping: {rel}");
            return Ok(EmitOutcome::NotFound);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if self.filter.is_ignored_file(&name) {
            info!("Ignoring file explicitly: {rel}");
            return Ok(EmitOutcome::Ignored);
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Error reading file {rel}: {e}");
                return Ok(EmitOutcome::Unreadable(e));
            }
        };
        // Malformed sequences become U+FFFD instead of failing the read
        let contents = String::from_utf8_lossy(&bytes);

        info!("Appending: {rel}");
        let hint = markdown::language_hint(path, self.config);
        self.write(&markdown::file_block(&rel, hint, &contents))?;
        self.stats.files += 1;
        self.stats.content_bytes += bytes.len();
        Ok(EmitOutcome::Appended)
    }

    pub fn stats(&self) -> EmitStats {
        self.stats
    }

    /// `path` relative to the project root with `/` separators.
    fn relative_path(
        &self,
        path: &Path,
    ) -> String {
        path.strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_slash_lossy()
            .into_owned()
    }

    fn write(
        &mut self,
        text: &str,
    ) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("failed to write output document")
    }
}

/// Absolute, symlink-resolved form used as the dedup key.
fn normalize(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
