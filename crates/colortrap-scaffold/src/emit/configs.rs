//! JSON config templates

use crate::report::{Category, StageReport};
use crate::structure::manifest::StructureManifest;
use crate::write::{self, WritePolicy};
use anyhow::{Context, Result};
use std::path::Path;

/// A JSON document written into the assets config folder
#[derive(Debug, Clone, Copy)]
pub struct ConfigDocument {
    pub file_name: &'static str,
    source: &'static str,
}

/// Documents every run writes
pub const CONFIG_DOCUMENTS: &[ConfigDocument] = &[
    ConfigDocument {
        file_name: "game_config.json",
        source: include_str!("../../assets/config/game_config.json"),
    },
    ConfigDocument {
        file_name: "balance_config.json",
        source: include_str!("../../assets/config/balance_config.json"),
    },
];

impl ConfigDocument {
    pub fn value(&self) -> Result<serde_json::Value> {
        serde_json::from_str(self.source)
            .with_context(|| format!("Built-in {} is not valid JSON", self.file_name))
    }

    /// Pretty-printed with two-space indentation, keys in declared order
    pub fn render(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.value()?)
            .with_context(|| format!("Failed to serialize {}", self.file_name))?;
        text.push('\n');
        Ok(text)
    }
}

/// Write every config document under `policy`
pub async fn write_configs(
    manifest: &StructureManifest,
    root: &Path,
    policy: WritePolicy,
) -> Result<StageReport> {
    let config_root = manifest.config_root(root);
    write::ensure_dir(&config_root).await?;

    let mut report = StageReport::default();
    for document in CONFIG_DOCUMENTS {
        let content = document.render()?;
        let outcome =
            write::write_file(&config_root.join(document.file_name), content.as_bytes(), policy)
                .await?;
        report.record(
            Category::Config,
            outcome,
            format!("assets/{}/{}", manifest.assets.config_dir, document.file_name),
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write::WriteOutcome;

    fn document(name: &str) -> &'static ConfigDocument {
        CONFIG_DOCUMENTS
            .iter()
            .find(|d| d.file_name == name)
            .unwrap()
    }

    #[test]
    fn test_game_config_difficulty_tiers() {
        let value = document("game_config.json").value().unwrap();
        let tiers: Vec<&String> = value["difficulty"].as_object().unwrap().keys().collect();

        assert_eq!(tiers, vec!["EASY", "MEDIUM", "HARD", "SUPER_HARD"]);
        assert_eq!(value["difficulty"]["SUPER_HARD"]["nMinusOneRule"], true);
        assert_eq!(value["skins"]["defaultSkin"], "color");
    }

    #[test]
    fn test_balance_config_level_tables() {
        let value = document("balance_config.json").value().unwrap();
        let modes = &value["modes"];

        assert_eq!(modes["NORMAL"]["levels"].as_array().unwrap().len(), 9);
        assert_eq!(modes["HARD"]["levels"].as_array().unwrap().len(), 5);
        assert_eq!(modes["SUPER_HARD"]["levels"].as_array().unwrap().len(), 4);
        assert_eq!(modes["RELAX"]["levels"].as_array().unwrap().len(), 6);
        assert_eq!(modes["RELAX"]["lives"], 3);
        assert_eq!(value["items"]["costs"]["SHIELD"], 300);
        assert_eq!(value["scoring"]["perfectBonus"], 50);
    }

    #[test]
    fn test_render_keeps_fractional_literals() {
        let text = document("balance_config.json").render().unwrap();

        assert!(text.starts_with("{\n  \"version\": \"1.0\",\n  \"modes\""));
        assert!(text.contains("\"timeLimit\": 5.0"));
        assert!(text.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_policy_decides_existing_configs() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = StructureManifest::builtin().unwrap();
        let config_root = manifest.config_root(dir.path());
        std::fs::create_dir_all(&config_root).unwrap();
        std::fs::write(config_root.join("game_config.json"), "{\"tuned\": true}").unwrap();

        let kept = write_configs(&manifest, dir.path(), WritePolicy::CreateIfAbsent)
            .await
            .unwrap();
        assert_eq!(kept.count(Category::Config, WriteOutcome::Skipped), 1);
        assert_eq!(kept.count(Category::Config, WriteOutcome::Created), 1);
        assert_eq!(
            std::fs::read_to_string(config_root.join("game_config.json")).unwrap(),
            "{\"tuned\": true}"
        );

        let replaced = write_configs(&manifest, dir.path(), WritePolicy::AlwaysOverwrite)
            .await
            .unwrap();
        assert_eq!(replaced.count(Category::Config, WriteOutcome::Overwritten), 2);
        assert!(std::fs::read_to_string(config_root.join("game_config.json"))
            .unwrap()
            .contains("\"difficulty\""));
    }
}
