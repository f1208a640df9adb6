use crate::config::Config;
use crate::context::emitter::Emitter;
use crate::context::filter::Filter;
use crate::tokenizer;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files: usize,
    pub content_bytes: usize,
    pub tokens: Option<usize>,
    pub elapsed: Duration,
    pub output: PathBuf,
}

/// Generates the context document for one project root.
pub struct Pipeline {
    config: Config,
    filter: Filter,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let filter = Filter::new(&config)?;
        Ok(Pipeline { config, filter })
    }

    /// Writes the whole document. The output handle is dropped (and closed)
    /// on every path out of this function.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let generated_at = Local::now();
        let output = self.config.output_path();
        info!("Starting code context generation...");
        info!("Output file: {}", self.config.output_filename);

        let file = File::create(&output)
            .with_context(|| format!("cannot open output file {}", output.display()))?;
        let emitter = Emitter::new(&self.config, &self.filter, BufWriter::new(file));
        let (writer, stats) = emitter.run(&generated_at)?;
        drop(writer);

        let tokens = match fs::read_to_string(&output) {
            Ok(doc) => tokenizer::count(&doc),
            Err(e) => {
                tracing::warn!("Could not re-read {} for token count: {e}", output.display());
                None
            }
        };

        Ok(RunSummary {
            files: stats.files,
            content_bytes: stats.content_bytes,
            tokens,
            elapsed: started.elapsed(),
            output,
        })
    }
}

impl RunSummary {
    /// Operator-facing completion report.
    pub fn report(&self) -> String {
        let tokens = self
            .tokens
            .map(|t| t.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "Code context generation complete!\n\
             Processed {} files ({} bytes, ~{} tokens).\n\
             Output written to: {}\n\
             Duration: {:.3}s\n\n\
             IMPORTANT: Please review the generated file for any sensitive data before sharing.",
            self.files,
            self.content_bytes,
            tokens,
            self.output.display(),
            self.elapsed.as_secs_f64()
        )
    }
}
