//! The static structure table and the source tree it produces
//!
//! This module provides:
//! - Manifest types (`StructureManifest`, `ScaffoldEntry`)
//! - Pure stub rendering (placeholders and enum bodies)
//! - The idempotent scaffolder

pub mod manifest;
pub mod scaffolder;
pub mod template;

pub use manifest::{FileEntry, ScaffoldEntry, StructureManifest};
pub use scaffolder::scaffold_sources;
pub use template::{StubStyle, PLACEHOLDER_MARKER};
