//! Source tree creation

use super::manifest::{join_relative, StructureManifest};
use super::template::{self, StubStyle};
use crate::report::{Category, StageReport};
use crate::write::{self, WriteOutcome, WritePolicy};
use anyhow::Result;
use std::path::Path;

/// Create every declared folder and stub that does not exist yet
///
/// Existing folders and files are left exactly as they are, so running this
/// again only fills in what has gone missing.
pub async fn scaffold_sources(
    manifest: &StructureManifest,
    root: &Path,
    style: &StubStyle<'_>,
) -> Result<StageReport> {
    let source_root = manifest.source_root(root);
    write::ensure_dir(&source_root).await?;

    let mut report = StageReport::default();

    for folder in &manifest.folders {
        let folder_path = join_relative(&source_root, &folder.path);
        let outcome = if write::ensure_dir(&folder_path).await? {
            WriteOutcome::Created
        } else {
            WriteOutcome::Skipped
        };
        report.record(Category::Folder, outcome, format!("{}/", folder.path));

        for file in &folder.files {
            let content = template::render(&folder.path, file, style);
            let outcome = write::write_file(
                &folder_path.join(&file.name),
                content.as_bytes(),
                WritePolicy::CreateIfAbsent,
            )
            .await?;
            report.record(Category::Stub, outcome, folder.file_path(file));
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::template::PLACEHOLDER_MARKER;

    const STYLE: StubStyle<'static> = StubStyle {
        package_prefix: "com.colortrap.game",
        enumerations: true,
        notes: &[],
    };

    fn source_file(root: &Path, relative: &str) -> std::path::PathBuf {
        join_relative(root, "app/src/main/java/com/colortrap/game").join(relative)
    }

    #[tokio::test]
    async fn test_first_run_creates_full_table() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        let report = scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        assert_eq!(report.count(Category::Folder, WriteOutcome::Created), 15);
        assert_eq!(report.count(Category::Stub, WriteOutcome::Created), 45);
        assert!(source_file(dir.path(), "ui/screens/settings/SettingsViewModel.kt").is_file());
    }

    #[tokio::test]
    async fn test_second_run_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();
        let report = scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        assert_eq!(report.count(Category::Folder, WriteOutcome::Created), 0);
        assert_eq!(report.count(Category::Stub, WriteOutcome::Created), 0);
        assert_eq!(report.count(Category::Stub, WriteOutcome::Skipped), 45);
    }

    #[tokio::test]
    async fn test_deleted_stub_is_recreated_alone() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        let deleted = source_file(dir.path(), "domain/ConfigManager.kt");
        let sibling = source_file(dir.path(), "domain/DynamicSkinManager.kt");
        std::fs::remove_file(&deleted).unwrap();
        std::fs::write(&sibling, "class DynamicSkinManager").unwrap();

        let report = scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        let created: Vec<&str> = report
            .paths(Category::Stub, WriteOutcome::Created)
            .collect();
        assert_eq!(created, vec!["domain/ConfigManager.kt"]);
        assert!(std::fs::read_to_string(&deleted)
            .unwrap()
            .contains(PLACEHOLDER_MARKER));
        assert_eq!(
            std::fs::read_to_string(&sibling).unwrap(),
            "class DynamicSkinManager"
        );
    }

    #[tokio::test]
    async fn test_deleted_folder_counts_again() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        std::fs::remove_dir_all(source_file(dir.path(), "ui/navigation")).unwrap();
        let report = scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        assert_eq!(report.count(Category::Folder, WriteOutcome::Created), 1);
        assert_eq!(report.count(Category::Stub, WriteOutcome::Created), 2);
    }

    #[tokio::test]
    async fn test_enum_files_get_constants() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        scaffold_sources(&manifest, dir.path(), &STYLE).await.unwrap();

        let item_type =
            std::fs::read_to_string(source_file(dir.path(), "data/models/ItemType.kt")).unwrap();
        assert!(item_type.starts_with("package com.colortrap.game.data.models\n"));
        assert!(item_type.contains("enum class ItemType {"));
        assert!(item_type.contains("    REMOVE_TRAP,\n"));
        assert!(!item_type.contains(PLACEHOLDER_MARKER));
    }
}
