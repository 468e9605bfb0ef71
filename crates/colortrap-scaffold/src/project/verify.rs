//! Project layout verification

use crate::error::ScaffoldError;
use crate::structure::manifest::{join_relative, ProjectLayout};
use std::path::Path;

/// Confirm the root exists and holds every required path
///
/// Stops at the first missing path.
pub fn verify_project(root: &Path, layout: &ProjectLayout) -> Result<(), ScaffoldError> {
    if !root.exists() {
        return Err(ScaffoldError::MissingRoot(root.to_path_buf()));
    }

    for required in &layout.required {
        let path = join_relative(root, required);
        if !path.exists() {
            return Err(ScaffoldError::MissingRequiredPath(path));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::StructureManifest;

    #[test]
    fn test_complete_project_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app/src/main")).unwrap();
        std::fs::write(dir.path().join("app/build.gradle.kts"), "").unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        assert!(verify_project(dir.path(), &manifest.project).is_ok());
    }

    #[test]
    fn test_missing_build_descriptor_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app/src/main")).unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        match verify_project(dir.path(), &manifest.project) {
            Err(ScaffoldError::MissingRequiredPath(path)) => {
                assert!(path.ends_with("build.gradle.kts"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();

        assert!(matches!(
            verify_project(&dir.path().join("absent"), &manifest.project),
            Err(ScaffoldError::MissingRoot(_))
        ));
    }
}
