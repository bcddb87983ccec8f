//! File ignore rules for the copy pass.
//! Rules are glob patterns matched against a file's base name only.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Compiled set of ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    glob_set: GlobSet,
}

impl IgnoreRules {
    /// Builds the rule set from the built-in backup-file rule plus `patterns`.
    ///
    /// # Errors
    /// * `Error::IgnoreError` if any pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in DEFAULT_IGNORE_PATTERNS {
            add_pattern(&mut builder, pattern)?;
        }
        for pattern in patterns {
            add_pattern(&mut builder, pattern.as_ref())?;
        }
        let glob_set = builder
            .build()
            .map_err(|e| Error::IgnoreError(format!("ignore rules loading failed: {}", e)))?;

        Ok(Self { glob_set })
    }

    /// Returns true if a file with this base name must not be copied.
    pub fn should_ignore_name<N: AsRef<Path>>(&self, name: N) -> bool {
        self.glob_set.is_match(name)
    }
}

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    debug!("Adding ignore pattern '{}'", pattern);
    let glob = Glob::new(pattern)
        .map_err(|e| Error::IgnoreError(format!("invalid pattern '{}': {}", pattern, e)))?;
    builder.add(glob);
    Ok(())
}
