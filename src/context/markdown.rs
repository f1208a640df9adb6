use crate::config::Config;
use chrono::{DateTime, Local};
use std::path::Path;

pub const CONFIG_SECTION: &str = "Key Configuration Files";
pub const SOURCE_SECTION: &str = "Source Code Files";

/// Fenced-block language tag for `path`, empty when the extension is unmapped.
pub fn language_hint<'a>(
    path: &Path,
    config: &'a Config,
) -> &'a str {
    path.extension()
        .and_then(|ext| {
            config
                .language_hints
                .get(&ext.to_string_lossy().to_ascii_lowercase())
        })
        .map(String::as_str)
        .unwrap_or("")
}

pub fn document_header(generated_at: &DateTime<Local>) -> String {
    format!(
        "# Project Code Context ({})\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn section_heading(title: &str) -> String {
    format!("## {title}\n\n")
}

/// One file entry: rule, heading, fenced and trimmed content.
pub fn file_block(
    relative_path: &str,
    lang_hint: &str,
    contents: &str,
) -> String {
    format!(
        "---\n### File: `{relative_path}`\n\n```{lang_hint}\n{}\n```\n\n",
        contents.trim()
    )
}

pub fn document_footer() -> &'static str {
    "---\n--- End of Context ---\n"
}
