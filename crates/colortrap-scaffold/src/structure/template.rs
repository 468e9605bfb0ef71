//! Source file templates
//!
//! Rendering is pure: the same folder, file and style always yield the same
//! text.

use super::manifest::FileEntry;

/// Reminder line every placeholder stub carries
pub const PLACEHOLDER_MARKER: &str = "TODO: Copy code from artifacts";

/// How stubs are rendered for one run
#[derive(Debug, Clone, Copy)]
pub struct StubStyle<'a> {
    /// Package prefix, e.g. `com.colortrap.game`
    pub package_prefix: &'a str,

    /// Give files with enum constants a real enum body
    pub enumerations: bool,

    /// Extra comment lines after the placeholder marker
    pub notes: &'a [&'a str],
}

/// Which template a file gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTemplate<'a> {
    Placeholder,
    Enumeration {
        name: &'a str,
        constants: &'a [String],
    },
}

impl<'a> FileTemplate<'a> {
    pub fn select(file: &'a FileEntry, style: &StubStyle<'_>) -> Self {
        if style.enumerations && file.is_enumeration() {
            FileTemplate::Enumeration {
                name: file.stem(),
                constants: &file.constants,
            }
        } else {
            FileTemplate::Placeholder
        }
    }
}

/// Package for a folder: prefix plus the folder path with `/` turned into `.`
pub fn package_name(prefix: &str, folder: &str) -> String {
    let suffix = folder.trim_matches('/').replace('/', ".");
    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{}.{}", prefix, suffix)
    }
}

/// Render the contents of `file` inside `folder`
pub fn render(folder: &str, file: &FileEntry, style: &StubStyle<'_>) -> String {
    let mut out = format!("package {}\n\n", package_name(style.package_prefix, folder));

    match FileTemplate::select(file, style) {
        FileTemplate::Placeholder => {
            out.push_str(&format!("// {}\n", PLACEHOLDER_MARKER));
            for note in style.notes {
                out.push_str(&format!("// {}\n", note));
            }
        }
        FileTemplate::Enumeration { name, constants } => {
            out.push_str(&format!("enum class {} {{\n", name));
            out.push_str(
                &constants
                    .iter()
                    .map(|c| format!("    {}", c))
                    .collect::<Vec<_>>()
                    .join(",\n"),
            );
            out.push_str("\n}\n");
        }
    }

    out
}
