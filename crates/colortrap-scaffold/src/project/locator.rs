//! Project root detection
//!
//! Detection is a pure function of the working directory, the home directory
//! and the project name. Prompting for a path when nothing matches is left to
//! the caller.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory every candidate root must contain
const APP_DIR: &str = "app";

/// Conventional folders under the home directory where projects live
const HOME_LOCATIONS: &[&str] = &["Downloads", "Desktop", "Projects"];

/// Which heuristic matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The working directory has the project layout
    WorkingDirectory,
    /// The working directory is named after the project
    NamedDirectory,
    /// An ancestor of the working directory is the project
    Ancestor,
    /// Found at one of the conventional locations
    KnownLocation,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Detection::WorkingDirectory => "current directory",
            Detection::NamedDirectory => "directory name",
            Detection::Ancestor => "parent directory",
            Detection::KnownLocation => "known location",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub path: PathBuf,
    pub detection: Detection,
}

fn has_main_sources(path: &Path) -> bool {
    path.join(APP_DIR).join("src").join("main").is_dir()
}

fn has_app_dir(path: &Path) -> bool {
    path.join(APP_DIR).is_dir()
}

/// Conventional locations, in the order they are tried
pub fn candidate_locations(cwd: &Path, home: Option<&Path>, project_name: &str) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(project_name)];
    if let Some(home) = home {
        candidates.extend(
            HOME_LOCATIONS
                .iter()
                .map(|location| home.join(location).join(project_name)),
        );
    }
    candidates
}

/// Find the project root; first match wins
pub fn locate_root(cwd: &Path, home: Option<&Path>, project_name: &str) -> Option<Located> {
    if has_main_sources(cwd) {
        return Some(Located {
            path: cwd.to_path_buf(),
            detection: Detection::WorkingDirectory,
        });
    }

    if cwd.file_name().is_some_and(|name| name == project_name) && has_app_dir(cwd) {
        return Some(Located {
            path: cwd.to_path_buf(),
            detection: Detection::NamedDirectory,
        });
    }

    if let Some(ancestor) = cwd
        .ancestors()
        .skip(1)
        .find(|dir| dir.file_name().is_some_and(|name| name == project_name) && has_main_sources(dir))
    {
        return Some(Located {
            path: ancestor.to_path_buf(),
            detection: Detection::Ancestor,
        });
    }

    candidate_locations(cwd, home, project_name)
        .into_iter()
        .find(|candidate| has_app_dir(candidate))
        .map(|path| Located {
            path,
            detection: Detection::KnownLocation,
        })
}

/// Run detection from the process working directory and the user's home
pub fn locate_from_environment(project_name: &str) -> (PathBuf, Option<Located>) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = dirs::home_dir();
    let located = locate_root(&cwd, home.as_deref(), project_name);
    (cwd, located)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(root: &Path) {
        std::fs::create_dir_all(root.join("app/src/main")).unwrap();
    }

    #[test]
    fn test_valid_root_is_returned_as_is() {
        let dir = tempfile::tempdir().unwrap();
        make_project(dir.path());

        let located = locate_root(dir.path(), None, "ColorTrap").unwrap();
        assert_eq!(located.path, dir.path());
        assert_eq!(located.detection, Detection::WorkingDirectory);
    }

    #[test]
    fn test_named_directory_with_app() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("ColorTrap");
        std::fs::create_dir_all(project.join("app")).unwrap();

        let located = locate_root(&project, None, "ColorTrap").unwrap();
        assert_eq!(located.path, project);
        assert_eq!(located.detection, Detection::NamedDirectory);
    }

    #[test]
    fn test_named_directory_without_app_is_not_enough() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("ColorTrap");
        std::fs::create_dir_all(&project).unwrap();

        assert_eq!(locate_root(&project, None, "ColorTrap"), None);
    }

    #[test]
    fn test_ancestor_named_after_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("ColorTrap");
        make_project(&project);
        let nested = project.join("app/src/main/java");
        std::fs::create_dir_all(&nested).unwrap();

        let located = locate_root(&nested, None, "ColorTrap").unwrap();
        assert_eq!(located.path, project);
        assert_eq!(located.detection, Detection::Ancestor);
    }

    #[test]
    fn test_project_subfolder_of_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ColorTrap/app")).unwrap();

        let located = locate_root(dir.path(), None, "ColorTrap").unwrap();
        assert_eq!(located.path, dir.path().join("ColorTrap"));
        assert_eq!(located.detection, Detection::KnownLocation);
    }

    #[test]
    fn test_home_locations_in_order() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(home.path().join("Desktop/ColorTrap/app")).unwrap();
        std::fs::create_dir_all(home.path().join("Projects/ColorTrap/app")).unwrap();

        let located = locate_root(cwd.path(), Some(home.path()), "ColorTrap").unwrap();
        assert_eq!(located.path, home.path().join("Desktop/ColorTrap"));
    }

    #[test]
    fn test_nothing_matches() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        assert_eq!(locate_root(cwd.path(), Some(home.path()), "ColorTrap"), None);
    }

    #[test]
    fn test_candidate_order() {
        let candidates =
            candidate_locations(Path::new("/work"), Some(Path::new("/home/dev")), "ColorTrap");
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/ColorTrap"),
                PathBuf::from("/home/dev/Downloads/ColorTrap"),
                PathBuf::from("/home/dev/Desktop/ColorTrap"),
                PathBuf::from("/home/dev/Projects/ColorTrap"),
            ]
        );
    }
}
