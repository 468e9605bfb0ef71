//! Locating and verifying the target project

pub mod locator;
pub mod verify;

pub use locator::{locate_from_environment, locate_root, Detection, Located};
pub use verify::verify_project;
