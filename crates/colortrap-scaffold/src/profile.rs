//! Profile trait for the setup binaries
//!
//! The two generations of the setup tool share every stage and differ only in
//! the choices captured here.

use crate::emit::docs::DocKind;
use crate::write::Policies;
use std::path::Path;

/// Configuration trait for the setup binaries
///
/// Each binary implements this trait to define:
/// - Identity (name, display name)
/// - How stubs are rendered
/// - Which docs are written and the default write policies
/// - Post-setup instructions
pub trait SetupProfile: Clone + Send + Sync + 'static {
    /// Internal name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Comment lines added to placeholder stubs after the TODO marker
    fn placeholder_notes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether files with enum constants receive a real enum body
    fn enumeration_templates(&self) -> bool;

    /// Markdown documents written at the project root
    fn docs(&self) -> &'static [DocKind];

    /// Write policies for configs and docs when no flag overrides them
    fn default_policies(&self) -> Policies;

    /// Generate the "next steps" instructions after setup
    fn next_steps(&self, root: &Path) -> Vec<String>;
}
