//! Non-interactive scaffolding run
//!
//! Verifies the root, then runs every stage in order. Each finished stage is
//! handed to an observer so a front end can show progress as it happens.
//! Docs are rendered from the source tree as it stands on disk.

use crate::emit::{self, DocContext};
use crate::profile::SetupProfile;
use crate::project::verify_project;
use crate::report::{RunStats, StageReport};
use crate::status::scan_progress;
use crate::structure::{scaffold_sources, StructureManifest, StubStyle};
use crate::write::Policies;
use anyhow::Result;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sources,
    AssetFolders,
    Configs,
    Docs,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Sources => "Creating Kotlin files",
            Stage::AssetFolders => "Creating asset folders",
            Stage::Configs => "Creating JSON configs",
            Stage::Docs => "Creating documentation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Scaffold `root` for `profile`
///
/// Verification failure aborts before anything is written. A failing stage
/// aborts the rest of the run; files already written stay in place.
pub async fn execute<P, F>(
    profile: &P,
    manifest: &StructureManifest,
    root: &Path,
    policies: Policies,
    mut observe: F,
) -> Result<RunStats>
where
    P: SetupProfile,
    F: FnMut(Stage, &StageReport) -> Result<()>,
{
    verify_project(root, &manifest.project)?;

    let style = StubStyle {
        package_prefix: &manifest.project.package_prefix,
        enumerations: profile.enumeration_templates(),
        notes: profile.placeholder_notes(),
    };
    let mut stats = RunStats::default();

    let report = scaffold_sources(manifest, root, &style).await?;
    stats.absorb(&report);
    observe(Stage::Sources, &report)?;

    let report = emit::create_asset_folders(manifest, root).await?;
    stats.absorb(&report);
    observe(Stage::AssetFolders, &report)?;

    let report = emit::write_configs(manifest, root, policies.configs).await?;
    stats.absorb(&report);
    observe(Stage::Configs, &report)?;

    let docs = profile.docs();
    let stats_so_far = stats;
    let progress = scan_progress(manifest, root)?;
    let ctx = DocContext {
        manifest,
        progress: &progress,
        stats: &stats_so_far,
        doc_count: docs.len(),
    };
    let report = emit::write_docs(&ctx, root, docs, policies.docs).await?;
    stats.absorb(&report);
    observe(Stage::Docs, &report)?;

    Ok(stats)
}
