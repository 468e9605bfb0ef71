//! Asset folder creation

use crate::report::{Category, StageReport};
use crate::structure::manifest::{join_relative, StructureManifest};
use crate::write::{self, WriteOutcome, WritePolicy};
use anyhow::Result;
use std::path::Path;

/// Create the asset folders; new ones get an empty marker file so version
/// control keeps them
pub async fn create_asset_folders(manifest: &StructureManifest, root: &Path) -> Result<StageReport> {
    let assets_root = manifest.assets_root(root);
    let mut report = StageReport::default();

    for folder in &manifest.assets.folders {
        let path = join_relative(&assets_root, folder);
        let display = format!("assets/{}/", folder);

        if !write::ensure_dir(&path).await? {
            report.record(Category::AssetFolder, WriteOutcome::Skipped, display);
            continue;
        }
        report.record(Category::AssetFolder, WriteOutcome::Created, display);

        let marker = path.join(&manifest.assets.marker);
        let outcome = write::write_file(&marker, b"", WritePolicy::CreateIfAbsent).await?;
        report.record(
            Category::Marker,
            outcome,
            format!("assets/{}/{}", folder, manifest.assets.marker),
        );
    }

    Ok(report)
}
