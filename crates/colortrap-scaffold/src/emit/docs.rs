//! Markdown status, checklist and file-map documents

use crate::report::{Category, RunStats, StageReport};
use crate::status::{Progress, StubState};
use crate::structure::manifest::{FileEntry, ScaffoldEntry, StructureManifest};
use crate::write::{self, WritePolicy};
use anyhow::Result;
use std::path::Path;

const COPY_GUIDE: &str = include_str!("../../assets/docs/COPY_GUIDE.md");

/// Artifact bundles the stub code is copied from
const ARTIFACT_SOURCES: &[(&str, &str)] = &[
    ("auto_scan_asset_system", "Data models, domain, utils"),
    ("dynamic_ui_components", "UI screens, components"),
    ("centralized_config", "Config files"),
    ("main_activity_nav", "Navigation"),
];

/// Documents a profile can emit at the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    StructureReadme,
    CopyChecklist,
    SetupStatus,
    CopyGuide,
    FileMap,
}

impl DocKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::StructureReadme => "README_STRUCTURE.md",
            DocKind::CopyChecklist => "COPY_CHECKLIST.md",
            DocKind::SetupStatus => "SETUP_STATUS.md",
            DocKind::CopyGuide => "COPY_GUIDE.md",
            DocKind::FileMap => "FILE_MAP.md",
        }
    }

    /// One-line description shown in the end-of-run summary
    pub fn summary(&self) -> &'static str {
        match self {
            DocKind::StructureReadme => "Folder organization",
            DocKind::CopyChecklist => "Files to fill, one checkbox each",
            DocKind::SetupStatus => "Current status & checklist",
            DocKind::CopyGuide => "Which code goes where",
            DocKind::FileMap => "Complete file structure",
        }
    }

    pub fn render(&self, ctx: &DocContext<'_>) -> String {
        match self {
            DocKind::StructureReadme => structure_readme(ctx),
            DocKind::CopyChecklist => copy_checklist(ctx),
            DocKind::SetupStatus => setup_status(ctx),
            DocKind::CopyGuide => COPY_GUIDE.to_string(),
            DocKind::FileMap => file_map(ctx),
        }
    }
}

/// Everything a document can interpolate
#[derive(Debug, Clone, Copy)]
pub struct DocContext<'a> {
    pub manifest: &'a StructureManifest,
    /// State of the source tree after the sources stage
    pub progress: &'a Progress,
    pub stats: &'a RunStats,
    /// Number of documents this run emits
    pub doc_count: usize,
}

impl DocContext<'_> {
    fn is_complete(&self, folder: &ScaffoldEntry, file: &FileEntry) -> bool {
        self.progress.state(&folder.file_path(file)) == Some(StubState::Filled)
    }

    fn complete_count(&self) -> usize {
        self.progress.count(StubState::Filled)
    }

    fn pending_count(&self) -> usize {
        self.manifest.file_count() - self.complete_count()
    }
}

/// Write `docs` into the project root under `policy`
pub async fn write_docs(
    ctx: &DocContext<'_>,
    root: &Path,
    docs: &[DocKind],
    policy: WritePolicy,
) -> Result<StageReport> {
    let mut report = StageReport::default();

    for doc in docs {
        let content = doc.render(ctx);
        let outcome = write::write_file(&root.join(doc.file_name()), content.as_bytes(), policy).await?;
        report.record(Category::Doc, outcome, doc.file_name());
    }

    Ok(report)
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "file"
    } else {
        "files"
    }
}

fn structure_readme(ctx: &DocContext<'_>) -> String {
    let manifest = ctx.manifest;
    let mut out = format!("# {} - Project Structure\n\n", manifest.project.name);
    out.push_str("## 📁 Folder Organization\n\n");

    for folder in &manifest.folders {
        let count = folder.files.len();
        out.push_str(&format!(
            "- `{}/` - {} ({} {})\n",
            folder.path,
            folder.description,
            count,
            plural(count)
        ));
    }
    out.push_str("- `ui/theme/` - Theme configuration (already exists)\n");

    out.push_str("\n### Assets\n");
    for folder in &manifest.assets.folders {
        out.push_str(&format!("- `assets/{}/`\n", folder));
    }

    out.push_str(
        "\n## 🎯 Next Steps\n\n\
         1. Copy code from conversation artifacts into each file\n\
         2. Add your color assets to `assets/skins/color/`\n\
         3. Sync Gradle\n\
         4. Build project\n\n",
    );
    out.push_str(&format!(
        "Total files to fill: {} Kotlin files\n",
        ctx.pending_count()
    ));
    out
}

fn copy_checklist(ctx: &DocContext<'_>) -> String {
    let manifest = ctx.manifest;
    let mut out = String::from("# Copy Code Checklist\n\n## ✅ Files to Copy\n");

    for folder in &manifest.folders {
        let count = folder.files.len();
        out.push_str(&format!(
            "\n### {} ({} {})\n",
            folder.description,
            count,
            plural(count)
        ));
        for file in &folder.files {
            let mark = if ctx.is_complete(folder, file) { "x" } else { " " };
            out.push_str(&format!("- [{}] {}\n", mark, folder.file_path(file)));
        }
    }

    out.push_str("\n### Root\n- [ ] MainActivity.kt (replace existing)\n");

    let total = manifest.file_count();
    out.push_str(&format!(
        "\n## 📊 Progress\nTotal: {} files\nCompleted: {}/{}\n",
        total,
        ctx.complete_count(),
        total
    ));

    out.push_str("\n## 🔍 Artifact Sources\n");
    for (artifact, contents) in ARTIFACT_SOURCES {
        out.push_str(&format!("- `{}` - {}\n", artifact, contents));
    }
    out
}

fn setup_status(ctx: &DocContext<'_>) -> String {
    let stats = ctx.stats;
    let mut out = String::from(
        "# Setup Status\n\n\
         ## ✅ Completed by Script\n\n\
         - [x] Folder structure created\n\
         - [x] Kotlin files generated (with package declarations)\n\
         - [x] JSON configs created\n\
         - [x] Asset folders created\n\
         - [x] Documentation generated\n\n\
         ## ⏳ Manual Steps Required\n\n\
         ### 1. Copy Code into Kotlin Files\n\
         See `COPY_GUIDE.md` for detailed instructions\n\n\
         ### 2. Update Build Files\n\
         - [ ] Replace `app/build.gradle.kts` (from artifact: build_gradle_centralized)\n\
         - [ ] Replace `app/src/main/res/values/strings.xml` (from artifact: strings_xml_centralized)\n\n\
         ### 3. Add Assets\n\
         - [ ] Copy your color assets to `app/src/main/assets/skins/color/`\n\n\
         ### 4. Sync & Build\n\
         - [ ] File → Sync Project with Gradle Files\n\
         - [ ] Build → Rebuild Project\n\n\
         ## 📊 Statistics\n\n",
    );
    out.push_str(&format!("- Folders created: {}\n", stats.folders_created));
    out.push_str(&format!("- Kotlin files: {}\n", stats.stubs_created));
    out.push_str(&format!("- JSON configs: {}\n", stats.configs_written()));
    out.push_str(&format!("- Documentation: {}\n", ctx.doc_count));
    out.push_str(&format!(
        "- Declared files: {} ({} complete, {} to copy)\n",
        ctx.manifest.file_count(),
        ctx.complete_count(),
        ctx.pending_count()
    ));
    out
}

/// Directory node for the file-map tree, children in manifest order
#[derive(Debug, Default)]
struct TreeNode<'a> {
    name: &'a str,
    files: Vec<(&'a ScaffoldEntry, &'a FileEntry)>,
    children: Vec<TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    fn insert(&mut self, segments: &[&'a str], folder: &'a ScaffoldEntry) {
        let Some((first, rest)) = segments.split_first() else {
            self.files.extend(folder.files.iter().map(|file| (folder, file)));
            return;
        };

        let index = match self.children.iter().position(|c| c.name == *first) {
            Some(index) => index,
            None => {
                self.children.push(TreeNode {
                    name: first,
                    ..TreeNode::default()
                });
                self.children.len() - 1
            }
        };
        self.children[index].insert(rest, folder);
    }

    fn render(&self, ctx: &DocContext<'_>, prefix: &str, out: &mut String) {
        let entries = self.files.len() + self.children.len();
        let mut position = 0;

        for (folder, file) in &self.files {
            position += 1;
            let branch = if position == entries { "└── " } else { "├── " };
            let mark = if ctx.is_complete(folder, file) {
                "✅ (has code)"
            } else {
                "⏳"
            };
            out.push_str(&format!("{}{}{} {}\n", prefix, branch, file.name, mark));
        }

        for child in &self.children {
            position += 1;
            let last = position == entries;
            let branch = if last { "└── " } else { "├── " };
            out.push_str(&format!("{}{}{}/\n", prefix, branch, child.name));

            let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
            child.render(ctx, &next, out);
        }
    }
}

fn file_map(ctx: &DocContext<'_>) -> String {
    let manifest = ctx.manifest;
    let mut tree = TreeNode::default();
    for folder in &manifest.folders {
        let segments: Vec<&str> = folder.path.split('/').filter(|s| !s.is_empty()).collect();
        tree.insert(&segments, folder);
    }

    let mut out = String::from("# File Map - Complete Structure\n\n## 📁 Project Structure\n\n```\n");
    out.push_str(&format!("{}/\n", manifest.project.package_prefix));
    tree.render(ctx, "", &mut out);
    out.push_str("```\n\n");

    out.push_str(
        "Legend:\n\
         ✅ = Complete (has code)\n\
         ⏳ = Empty (needs code from artifacts)\n\n",
    );
    out.push_str(&format!(
        "Total: {} complete, {} to copy\n",
        ctx.complete_count(),
        ctx.pending_count()
    ));
    out
}
