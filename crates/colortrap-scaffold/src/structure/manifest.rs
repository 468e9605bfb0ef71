//! Structure manifest types and parsing

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Built-in manifest describing the ColorTrap layout
pub const BUILTIN_MANIFEST: &str = include_str!("../../assets/structure.yaml");

/// Project identity and the paths a valid project must already have
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectLayout {
    /// Project directory name, also used by root detection
    pub name: String,

    /// Package prefix for every generated source file
    pub package_prefix: String,

    /// Root of the package tree, relative to the project root
    pub source_root: String,

    /// Paths that must exist before anything is written
    #[serde(default)]
    pub required: Vec<String>,
}

/// Asset folders and where the JSON configs live
#[derive(Debug, Clone, Deserialize)]
pub struct AssetLayout {
    /// Assets directory, relative to the project root
    pub root: String,

    /// Zero-byte file dropped into newly created asset folders
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Config directory, relative to the assets root
    pub config_dir: String,

    #[serde(default)]
    pub folders: Vec<String>,
}

fn default_marker() -> String {
    ".gitkeep".to_string()
}

/// One file to generate
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub name: String,

    /// Enum constants for files that get a real enum body
    #[serde(default)]
    pub constants: Vec<String>,
}

impl FileEntry {
    /// File name without its extension
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.name)
    }

    pub fn is_enumeration(&self) -> bool {
        !self.constants.is_empty()
    }
}

/// One folder and the files it should contain
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldEntry {
    /// Folder path relative to the source root, `/`-separated
    pub path: String,

    #[serde(default)]
    pub description: String,

    pub files: Vec<FileEntry>,
}

impl ScaffoldEntry {
    /// Path of a file in this folder, relative to the source root
    pub fn file_path(&self, file: &FileEntry) -> String {
        format!("{}/{}", self.path, file.name)
    }
}

/// The complete static table driving a run
#[derive(Debug, Clone, Deserialize)]
pub struct StructureManifest {
    pub project: ProjectLayout,
    pub assets: AssetLayout,
    pub folders: Vec<ScaffoldEntry>,
}

impl StructureManifest {
    /// The manifest compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_MANIFEST).context("Failed to parse built-in structure manifest")
    }

    /// Load a manifest from disk (for development use)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: StructureManifest =
            serde_yaml::from_str(content).context("Failed to parse structure manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.folders.is_empty() {
            anyhow::bail!("Manifest declares no folders");
        }

        let relative_paths = std::iter::once(self.project.source_root.as_str())
            .chain(self.project.required.iter().map(String::as_str))
            .chain(std::iter::once(self.assets.root.as_str()))
            .chain(std::iter::once(self.assets.config_dir.as_str()))
            .chain(self.assets.folders.iter().map(String::as_str))
            .chain(self.folders.iter().map(|f| f.path.as_str()));
        for path in relative_paths {
            if !is_safe_relative(path) {
                anyhow::bail!("Manifest path must be relative and stay inside the project: '{}'", path);
            }
        }

        let mut seen_folders = HashSet::new();
        for folder in &self.folders {
            if !seen_folders.insert(folder.path.as_str()) {
                anyhow::bail!("Folder '{}' is declared twice", folder.path);
            }

            let mut seen_files = HashSet::new();
            for file in &folder.files {
                if file.name.is_empty() || file.name.contains('/') {
                    anyhow::bail!("Invalid file name '{}' in '{}'", file.name, folder.path);
                }
                if !seen_files.insert(file.name.as_str()) {
                    anyhow::bail!("File '{}' is declared twice in '{}'", file.name, folder.path);
                }
            }
        }

        Ok(())
    }

    /// Number of source files the table declares
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }

    /// Number of files that carry enum constants
    pub fn enumeration_count(&self) -> usize {
        self.folders
            .iter()
            .flat_map(|f| &f.files)
            .filter(|f| f.is_enumeration())
            .count()
    }

    /// Every declared file, relative to the source root
    pub fn declared_files(&self) -> impl Iterator<Item = (&ScaffoldEntry, &FileEntry)> {
        self.folders
            .iter()
            .flat_map(|folder| folder.files.iter().map(move |file| (folder, file)))
    }

    pub fn source_root(&self, root: &Path) -> PathBuf {
        join_relative(root, &self.project.source_root)
    }

    pub fn assets_root(&self, root: &Path) -> PathBuf {
        join_relative(root, &self.assets.root)
    }

    pub fn config_root(&self, root: &Path) -> PathBuf {
        join_relative(&self.assets_root(root), &self.assets.config_dir)
    }
}

/// Join a `/`-separated manifest path onto a base directory
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && !path.contains(':')
        && path.split('/').all(|segment| segment != "..")
}
