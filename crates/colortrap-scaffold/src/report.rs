//! Stage reports and run counters
//!
//! Each stage returns a [`StageReport`]; the front end folds them into one
//! [`RunStats`] and renders it once at the end.

use crate::write::WriteOutcome;

/// Kind of path a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Folder,
    Stub,
    AssetFolder,
    Marker,
    Config,
    Doc,
}

/// One path a stage looked at, and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub category: Category,
    pub outcome: WriteOutcome,
    /// Display path relative to the stage's base directory
    pub path: String,
}

#[derive(Debug, Clone, Default)]
pub struct StageReport {
    pub changes: Vec<Change>,
}

impl StageReport {
    pub fn record(&mut self, category: Category, outcome: WriteOutcome, path: impl Into<String>) {
        self.changes.push(Change {
            category,
            outcome,
            path: path.into(),
        });
    }

    pub fn count(&self, category: Category, outcome: WriteOutcome) -> usize {
        self.changes
            .iter()
            .filter(|c| c.category == category && c.outcome == outcome)
            .count()
    }

    pub fn paths(&self, category: Category, outcome: WriteOutcome) -> impl Iterator<Item = &str> {
        self.changes
            .iter()
            .filter(move |c| c.category == category && c.outcome == outcome)
            .map(|c| c.path.as_str())
    }

    /// Changes that actually wrote something
    pub fn written(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(|c| c.outcome.wrote())
    }
}

/// Counters for one run. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub folders_created: usize,
    pub stubs_created: usize,
    pub stubs_skipped: usize,
    pub asset_folders_created: usize,
    pub markers_created: usize,
    pub configs_created: usize,
    pub configs_overwritten: usize,
    pub configs_skipped: usize,
    pub docs_created: usize,
    pub docs_overwritten: usize,
    pub docs_skipped: usize,
}

impl RunStats {
    pub fn absorb(&mut self, report: &StageReport) {
        for change in &report.changes {
            self.record(change.category, change.outcome);
        }
    }

    pub fn record(&mut self, category: Category, outcome: WriteOutcome) {
        use Category::*;
        use WriteOutcome::*;

        let counter = match (category, outcome) {
            (Folder, Created) => &mut self.folders_created,
            (Stub, Created) => &mut self.stubs_created,
            (Stub, _) => &mut self.stubs_skipped,
            (AssetFolder, Created) => &mut self.asset_folders_created,
            (Marker, Created) => &mut self.markers_created,
            (Config, Created) => &mut self.configs_created,
            (Config, Overwritten) => &mut self.configs_overwritten,
            (Config, Skipped) => &mut self.configs_skipped,
            (Doc, Created) => &mut self.docs_created,
            (Doc, Overwritten) => &mut self.docs_overwritten,
            (Doc, Skipped) => &mut self.docs_skipped,
            // Existing folders and markers are not counted
            (Folder | AssetFolder | Marker, _) => return,
        };
        *counter += 1;
    }

    /// Configs written this run, new or replaced
    pub fn configs_written(&self) -> usize {
        self.configs_created + self.configs_overwritten
    }

    /// Docs written this run, new or replaced
    pub fn docs_written(&self) -> usize {
        self.docs_created + self.docs_overwritten
    }

    /// Label/value pairs for the end-of-run summary
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Folders", self.folders_created),
            ("Kotlin files", self.stubs_created),
            ("Existing files kept", self.stubs_skipped),
            ("Asset folders", self.asset_folders_created),
            ("Config files", self.configs_written()),
            ("Documentation", self.docs_written()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_counts_by_category_and_outcome() {
        let mut report = StageReport::default();
        report.record(Category::Folder, WriteOutcome::Created, "domain/");
        report.record(Category::Folder, WriteOutcome::Skipped, "utils/");
        report.record(Category::Stub, WriteOutcome::Created, "domain/A.kt");
        report.record(Category::Stub, WriteOutcome::Skipped, "utils/B.kt");
        report.record(Category::Config, WriteOutcome::Overwritten, "game_config.json");
        report.record(Category::Doc, WriteOutcome::Created, "FILE_MAP.md");

        let mut stats = RunStats::default();
        stats.absorb(&report);

        assert_eq!(stats.folders_created, 1);
        assert_eq!(stats.stubs_created, 1);
        assert_eq!(stats.stubs_skipped, 1);
        assert_eq!(stats.configs_written(), 1);
        assert_eq!(stats.configs_created, 0);
        assert_eq!(stats.docs_written(), 1);
    }

    #[test]
    fn test_written_excludes_skips() {
        let mut report = StageReport::default();
        report.record(Category::Doc, WriteOutcome::Skipped, "SETUP_STATUS.md");
        report.record(Category::Doc, WriteOutcome::Overwritten, "FILE_MAP.md");

        let written: Vec<&str> = report.written().map(|c| c.path.as_str()).collect();
        assert_eq!(written, vec!["FILE_MAP.md"]);
    }

    #[test]
    fn test_summary_lists_every_counter_group() {
        let stats = RunStats {
            folders_created: 15,
            stubs_created: 45,
            ..RunStats::default()
        };
        let summary = stats.summary();

        assert_eq!(summary[0], ("Folders", 15));
        assert_eq!(summary[1], ("Kotlin files", 45));
        assert_eq!(summary.len(), 6);
    }
}
