//! Guarded filesystem writes
//!
//! Every write checks for an existing path first. Whether an existing file is
//! left alone or replaced is decided by a [`WritePolicy`], chosen per file
//! category.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use tokio::fs;

/// What to do when the target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WritePolicy {
    /// Leave existing files untouched
    CreateIfAbsent,
    /// Replace existing files with freshly rendered content
    AlwaysOverwrite,
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WritePolicy::CreateIfAbsent => write!(f, "create-if-absent"),
            WritePolicy::AlwaysOverwrite => write!(f, "always-overwrite"),
        }
    }
}

/// Write policies for the categories that allow a choice
///
/// Source stubs and folder markers are always create-if-absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policies {
    pub configs: WritePolicy,
    pub docs: WritePolicy,
}

impl Policies {
    pub const fn uniform(policy: WritePolicy) -> Self {
        Self {
            configs: policy,
            docs: policy,
        }
    }

    /// Apply command-line overrides on top of these defaults
    pub fn with_overrides(self, configs: Option<WritePolicy>, docs: Option<WritePolicy>) -> Self {
        Self {
            configs: configs.unwrap_or(self.configs),
            docs: docs.unwrap_or(self.docs),
        }
    }
}

/// Result of one guarded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

impl WriteOutcome {
    pub fn wrote(&self) -> bool {
        !matches!(self, WriteOutcome::Skipped)
    }
}

/// Write `contents` to `path` according to `policy`
pub async fn write_file(path: &Path, contents: &[u8], policy: WritePolicy) -> Result<WriteOutcome> {
    let existed = fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;

    if existed && policy == WritePolicy::CreateIfAbsent {
        return Ok(WriteOutcome::Skipped);
    }

    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}

/// Create `path` and its parents if missing. Returns true when it was created.
pub async fn ensure_dir(path: &Path) -> Result<bool> {
    let existed = fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;
    if existed {
        return Ok(false);
    }

    fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    Ok(true)
}
