//! ColorTrap structure generator - folders and empty source files

use clap::{Parser, Subcommand};
use colortrap_scaffold::tui::{self, SetupArgs, StatusArgs};
use colortrap_scaffold::{DocKind, Policies, SetupProfile, WritePolicy};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Structure generator profile
#[derive(Clone)]
pub struct StructureConfig;

impl SetupProfile for StructureConfig {
    fn name(&self) -> &'static str {
        "colortrap-structure"
    }

    fn display_name(&self) -> &'static str {
        "Project Structure Generator"
    }

    fn enumeration_templates(&self) -> bool {
        false
    }

    fn docs(&self) -> &'static [DocKind] {
        &[DocKind::StructureReadme, DocKind::CopyChecklist]
    }

    fn default_policies(&self) -> Policies {
        Policies::uniform(WritePolicy::CreateIfAbsent)
    }

    fn next_steps(&self, root: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(root) {
            steps.push(format!("cd {}", root.display()));
        }

        steps.push("Read COPY_CHECKLIST.md".to_string());
        steps.push("Copy code from artifacts into each .kt file".to_string());
        steps.push("Replace app/build.gradle.kts".to_string());
        steps.push("Replace app/src/main/res/values/strings.xml".to_string());
        steps.push("Sync Gradle in IntelliJ".to_string());
        steps.push("Build project".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "colortrap-structure")]
#[command(about = "Creates all ColorTrap folders and empty source files")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the folder structure and stubs (default)
    Setup(CliSetupArgs),
    /// Show which generated files still need code
    Status(CliStatusArgs),
}

#[derive(Parser, Debug)]
pub struct CliSetupArgs {
    /// Project root (skips auto-detection)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Structure manifest to use instead of the built-in one (for development use)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// What to do with existing JSON configs
    #[arg(long, value_enum)]
    pub configs: Option<WritePolicy>,

    /// What to do with existing Markdown docs
    #[arg(long, value_enum)]
    pub docs: Option<WritePolicy>,

    /// Never prompt; fail if the project root cannot be detected
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliSetupArgs> for SetupArgs {
    fn from(args: CliSetupArgs) -> Self {
        SetupArgs {
            root: args.root,
            manifest: args.manifest,
            configs: args.configs,
            docs: args.docs,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliStatusArgs {
    /// Project root (skips auto-detection)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Structure manifest to use instead of the built-in one (for development use)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Never prompt; fail if the project root cannot be detected
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliStatusArgs> for StatusArgs {
    fn from(args: CliStatusArgs) -> Self {
        StatusArgs {
            root: args.root,
            manifest: args.manifest,
            yes: args.yes,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tui::install_terminal_guards();

    let args = Args::parse();
    let config = StructureConfig;

    let result = match args.command {
        Some(Command::Setup(setup_args)) => colortrap_scaffold::run(&config, setup_args.into()).await,
        Some(Command::Status(status_args)) => tui::run_status(&config, status_args.into()),
        None => colortrap_scaffold::run(&config, SetupArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    tui::finish(result)
}
