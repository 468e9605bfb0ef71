//! Error kinds that end a scaffolding run

use std::path::PathBuf;
use thiserror::Error;

/// Failures with a dedicated exit path
///
/// Anything else (permissions, disk I/O) travels as a plain `anyhow::Error`
/// with context attached where it happened.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// None of the detection heuristics matched and no prompt was allowed
    #[error("could not auto-detect the project root from {}", .cwd.display())]
    RootNotFound { cwd: PathBuf },

    /// The resolved root does not exist on disk
    #[error("project root not found: {}", .0.display())]
    MissingRoot(PathBuf),

    /// A path the project layout requires is absent
    #[error("missing required path: {}", .0.display())]
    MissingRequiredPath(PathBuf),

    /// The operator interrupted the run
    #[error("cancelled by user")]
    Cancelled,
}

impl ScaffoldError {
    /// Whether this error means the operator aborted on purpose
    pub fn is_cancellation(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::Cancelled))
    }

    /// Whether the root failed the layout check
    pub fn is_invalid_project(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::MissingRoot(_) | ScaffoldError::MissingRequiredPath(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_detected_through_anyhow() {
        let err: anyhow::Error = ScaffoldError::Cancelled.into();
        assert!(ScaffoldError::is_cancellation(&err));

        let err: anyhow::Error = ScaffoldError::MissingRoot(PathBuf::from("/nowhere")).into();
        assert!(!ScaffoldError::is_cancellation(&err));
    }

    #[test]
    fn test_invalid_project_covers_both_layout_failures() {
        let err: anyhow::Error = ScaffoldError::MissingRoot(PathBuf::from("/nowhere")).into();
        assert!(ScaffoldError::is_invalid_project(&err));

        let err: anyhow::Error = ScaffoldError::MissingRequiredPath(PathBuf::from("app")).into();
        assert!(ScaffoldError::is_invalid_project(&err));

        let err: anyhow::Error = ScaffoldError::Cancelled.into();
        assert!(!ScaffoldError::is_invalid_project(&err));
    }

    #[test]
    fn test_missing_path_message_names_the_path() {
        let err = ScaffoldError::MissingRequiredPath(PathBuf::from("proj/app/build.gradle.kts"));
        assert!(err.to_string().contains("app/build.gradle.kts"));
    }
}
