//! ColorTrap Scaffold - shared library for the ColorTrap setup CLIs
//!
//! Generates the empty ColorTrap project skeleton: package folders with
//! placeholder Kotlin stubs, asset folders, JSON config templates and
//! Markdown checklists. Two binaries (`colortrap-structure`,
//! `colortrap-setup`) share every stage and differ only in their
//! [`SetupProfile`].
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - root detection, verification, the
//!   structure table, guarded writes, emitters, progress scanning
//! - **Layer 2: Orchestration** - `SetupProfile` and `pipeline::execute`,
//!   which returns a `RunStats` instead of printing
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based prompts
//!   (feature-gated)
//!
//! Every write is guarded by an existence check, so a run on an already
//! scaffolded project only fills in what is missing.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use colortrap_scaffold::{pipeline, StructureManifest, SetupProfile};
//!
//! let manifest = StructureManifest::builtin()?;
//! let stats = pipeline::execute(&MyProfile, &manifest, &root, MyProfile.default_policies(), |_, _| Ok(())).await?;
//! println!("{} stubs created", stats.stubs_created);
//! ```

pub mod emit;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod project;
pub mod report;
pub mod status;
pub mod structure;
pub mod write;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use emit::DocKind;
pub use error::ScaffoldError;
pub use profile::SetupProfile;
pub use report::RunStats;
pub use structure::StructureManifest;
pub use write::{Policies, WritePolicy};

#[cfg(feature = "tui")]
pub use tui::run;

/// Heading shown at the start of a run, e.g. "ColorTrap - Phase 2 Auto Setup"
pub fn product_name<C: SetupProfile>(config: &C, manifest: &StructureManifest) -> String {
    format!("{} - {}", manifest.project.name, config.display_name())
}
