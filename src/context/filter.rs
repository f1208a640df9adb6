use crate::config::Config;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

#[derive(Debug)]
pub struct InvalidIgnorePattern {
    pub pattern: String,
    pub source: globset::Error,
}

impl std::fmt::Display for InvalidIgnorePattern {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "invalid ignore pattern {:?}: {}", self.pattern, self.source)
    }
}

impl std::error::Error for InvalidIgnorePattern {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Name-based exclusion rules. Both predicates look only at a base name and
/// are pure functions of the configuration.
#[derive(Debug, Clone)]
pub struct Filter {
    ignored_dirs: HashSet<String>,
    ignored_files: HashSet<String>,
    patterns: GlobSet,
}

impl Filter {
    pub fn new(config: &Config) -> Result<Self, InvalidIgnorePattern> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.ignored_file_patterns {
            let glob = Glob::new(pattern).map_err(|source| InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let patterns = builder.build().map_err(|source| InvalidIgnorePattern {
            pattern: config.ignored_file_patterns.join(", "),
            source,
        })?;
        Ok(Filter {
            ignored_dirs: config.ignored_dirs.iter().cloned().collect(),
            ignored_files: config.ignored_files.iter().cloned().collect(),
            patterns,
        })
    }

    pub fn is_ignored_directory(
        &self,
        name: &str,
    ) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// Exact file names first, then the wildcard patterns.
    pub fn is_ignored_file(
        &self,
        name: &str,
    ) -> bool {
        self.ignored_files.contains(name) || self.patterns.is_match(name)
    }
}
