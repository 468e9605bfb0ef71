//! Progress of the manual copy work
//!
//! Read-only: looks at the generated source tree and reports which stubs
//! still carry the placeholder marker.

use crate::structure::manifest::{join_relative, StructureManifest};
use crate::structure::template::PLACEHOLDER_MARKER;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Extension of source files the scan considers
const SOURCE_EXTENSION: &str = "kt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubState {
    /// Code has been pasted in
    Filled,
    /// Still the generated placeholder
    Pending,
    /// Declared but not on disk
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct Progress {
    /// Declared files in manifest order
    pub files: Vec<(String, StubState)>,
    /// Source files on disk the manifest does not declare
    pub untracked: Vec<String>,
}

impl Progress {
    pub fn count(&self, state: StubState) -> usize {
        self.files.iter().filter(|(_, s)| *s == state).count()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// State of one declared file, by its path under the source root
    pub fn state(&self, relative: &str) -> Option<StubState> {
        self.files
            .iter()
            .find(|(path, _)| path == relative)
            .map(|(_, state)| *state)
    }

    pub fn paths(&self, state: StubState) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(move |(_, s)| *s == state)
            .map(|(path, _)| path.as_str())
    }
}

/// Classify every declared file and list undeclared sources
pub fn scan_progress(manifest: &StructureManifest, root: &Path) -> Result<Progress> {
    let source_root = manifest.source_root(root);
    let mut progress = Progress::default();

    for (folder, file) in manifest.declared_files() {
        let relative = folder.file_path(file);
        let path = join_relative(&source_root, &relative);

        let state = if !path.is_file() {
            StubState::Missing
        } else {
            let content = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if String::from_utf8_lossy(&content).contains(PLACEHOLDER_MARKER) {
                StubState::Pending
            } else {
                StubState::Filled
            }
        };
        progress.files.push((relative, state));
    }

    if !source_root.is_dir() {
        return Ok(progress);
    }

    let declared: HashSet<&str> = progress.files.iter().map(|(p, _)| p.as_str()).collect();
    let mut untracked = Vec::new();
    for entry in WalkDir::new(&source_root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source_root.display()))?;
        if !entry.file_type().is_file()
            || entry.path().extension() != Some(OsStr::new(SOURCE_EXTENSION))
        {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&source_root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if !declared.contains(relative.as_str()) {
            untracked.push(relative);
        }
    }
    progress.untracked = untracked;

    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{scaffold_sources, StubStyle};

    const STYLE: StubStyle<'static> = StubStyle {
        package_prefix: "com.colortrap.game",
        enumerations: true,
        notes: &[],
    };

    #[test]
    fn test_empty_project_is_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        let progress = scan_progress(&manifest, dir.path()).unwrap();

        assert_eq!(progress.total(), 45);
        assert_eq!(progress.count(StubState::Missing), 45);
        assert!(progress.untracked.is_empty());
    }

    #[tokio::test]
    async fn test_classifies_filled_pending_and_untracked() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        let source_root = manifest.source_root(dir.path());
        std::fs::write(
            source_root.join("domain/ConfigManager.kt"),
            "package com.colortrap.game.domain\n\nobject ConfigManager\n",
        )
        .unwrap();
        std::fs::remove_file(source_root.join("utils/AdManager.kt")).unwrap();
        std::fs::write(source_root.join("MainActivity.kt"), "class MainActivity").unwrap();
        std::fs::write(source_root.join("ui/notes.txt"), "not source").unwrap();

        let progress = scan_progress(&manifest, dir.path()).unwrap();

        // Four enum models plus the edited file
        assert_eq!(progress.count(StubState::Filled), 5);
        assert_eq!(progress.count(StubState::Missing), 1);
        assert_eq!(progress.count(StubState::Pending), 39);
        assert_eq!(progress.untracked, vec!["MainActivity.kt"]);
        assert_eq!(
            progress.paths(StubState::Missing).collect::<Vec<_>>(),
            vec!["utils/AdManager.kt"]
        );
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        let source_root = manifest.source_root(dir.path());
        std::fs::write(source_root.join("utils/SoundManager.kt"), [0xff, 0xfe, b'o', b'k']).unwrap();
        let mut pending = b"// \xff\n// ".to_vec();
        pending.extend_from_slice(PLACEHOLDER_MARKER.as_bytes());
        std::fs::write(source_root.join("utils/AdManager.kt"), &pending).unwrap();

        let progress = scan_progress(&manifest, dir.path()).unwrap();

        assert_eq!(progress.state("utils/SoundManager.kt"), Some(StubState::Filled));
        assert_eq!(progress.state("utils/AdManager.kt"), Some(StubState::Pending));
        assert_eq!(progress.state("utils/Unknown.kt"), None);
    }
}
