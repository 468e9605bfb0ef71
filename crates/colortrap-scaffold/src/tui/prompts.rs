//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::pipeline::{self, Stage};
use crate::product_name;
use crate::profile::SetupProfile;
use crate::project::{locate_from_environment, verify_project};
use crate::report::{Category, RunStats, StageReport};
use crate::status::{self, StubState};
use crate::structure::StructureManifest;
use crate::write::{WriteOutcome, WritePolicy};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit code for a run the operator interrupted
pub const CANCELLED_EXIT_CODE: u8 = 130;

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Project root; skips auto-detection
    pub root: Option<PathBuf>,

    /// Structure manifest to use instead of the built-in one
    pub manifest: Option<PathBuf>,

    /// Override the profile's policy for JSON configs
    pub configs: Option<WritePolicy>,

    /// Override the profile's policy for Markdown docs
    pub docs: Option<WritePolicy>,

    /// Never prompt (non-interactive mode)
    pub yes: bool,
}

/// CLI arguments for the status command
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    pub root: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub yes: bool,
}

/// Run the setup with interactive prompts
pub async fn run<C: SetupProfile>(config: &C, args: SetupArgs) -> Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    cliclack::intro(product_name(config, &manifest))?;

    // Step 1: Find the project
    let root = resolve_root(&manifest, args.root.as_deref(), args.yes)?;

    // Step 2: Settle write policies
    let policies = config
        .default_policies()
        .with_overrides(args.configs, args.docs);
    cliclack::log::info(format!(
        "Configs: {}, docs: {}",
        policies.configs, policies.docs
    ))?;

    // Step 3: Verify and run every stage
    let stats = match pipeline::execute(config, &manifest, &root, policies, log_stage).await {
        Ok(stats) => stats,
        Err(e) => {
            if ScaffoldError::is_invalid_project(&e) {
                cliclack::log::error("Not a valid Android project structure")?;
            }
            return Err(e);
        }
    };

    // Step 4: Summary and next steps
    print_summary(config, &root, &stats)?;

    Ok(())
}

/// Show how much of the manual copy work is done
pub fn run_status<C: SetupProfile>(config: &C, args: StatusArgs) -> Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    cliclack::intro(format!("{} - status", manifest.project.name))?;

    let root = resolve_root(&manifest, args.root.as_deref(), args.yes)?;
    verify_project(&root, &manifest.project)?;

    let progress = status::scan_progress(&manifest, &root)?;
    let filled = progress.count(StubState::Filled);
    cliclack::log::info(format!(
        "{} of {} files filled in",
        filled.to_string().green(),
        progress.total()
    ))?;

    let pending: Vec<&str> = progress.paths(StubState::Pending).collect();
    if !pending.is_empty() {
        cliclack::log::warning(format!(
            "Still placeholders ({}):\n{}",
            pending.len(),
            pending.join("\n")
        ))?;
    }

    let missing: Vec<&str> = progress.paths(StubState::Missing).collect();
    if !missing.is_empty() {
        cliclack::log::error(format!(
            "Missing ({}), run `{}` to recreate:\n{}",
            missing.len(),
            config.name(),
            missing.join("\n")
        ))?;
    }

    if !progress.untracked.is_empty() {
        cliclack::log::remark(format!(
            "Other source files:\n{}",
            progress.untracked.join("\n")
        ))?;
    }

    if pending.is_empty() && missing.is_empty() {
        cliclack::outro("All files have code!")?;
    } else {
        cliclack::outro("Keep copying!")?;
    }

    Ok(())
}

/// Turn a run result into the process exit code, printing any error
pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if ScaffoldError::is_cancellation(&e) => {
            eprintln!("\n{}", "⚠ Cancelled by user".yellow());
            ExitCode::from(CANCELLED_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("\n{} {:?}", "✗ Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_manifest(path: &Option<PathBuf>) -> Result<StructureManifest> {
    match path {
        Some(path) => {
            let manifest = StructureManifest::load(path)?;
            cliclack::log::info(format!("Using manifest {}", path.display()))?;
            Ok(manifest)
        }
        None => StructureManifest::builtin(),
    }
}

/// Map a prompt failure, treating Ctrl+C / Esc as cancellation
fn prompt_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled.into()
    } else {
        err.into()
    }
}

fn resolve_root(manifest: &StructureManifest, explicit: Option<&Path>, yes: bool) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --root flag if provided
    if let Some(root) = explicit {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            current_dir.join(root)
        };
        cliclack::log::info(format!("Using project root: {}", root.display()))?;
        return Ok(root);
    }

    cliclack::log::step("Locating project root...")?;
    let (cwd, located) = locate_from_environment(&manifest.project.name);
    if let Some(located) = located {
        cliclack::log::success(format!(
            "Found project: {} (by {})",
            located.path.display(),
            located.detection
        ))?;
        return Ok(located.path);
    }

    cliclack::log::warning("Could not auto-detect project root")?;
    cliclack::log::info(format!("Current directory: {}", cwd.display()))?;

    if yes {
        return Err(ScaffoldError::RootNotFound { cwd }.into());
    }

    let input: String = cliclack::input(format!("Enter {} project path", manifest.project.name))
        .interact()
        .map_err(prompt_error)?;

    Ok(PathBuf::from(input.trim()))
}

fn log_stage(stage: Stage, report: &StageReport) -> Result<()> {
    let lines: Vec<String> = report
        .written()
        .filter(|c| c.category != Category::Marker)
        .map(|c| match c.outcome {
            WriteOutcome::Overwritten => format!("{} {}", c.path, "(overwritten)".dimmed()),
            _ => c.path.clone(),
        })
        .collect();

    if lines.is_empty() {
        cliclack::log::remark(format!("{}: nothing new, everything exists", stage))?;
    } else {
        cliclack::log::success(format!("{}\n{}", stage, lines.join("\n")))?;
    }

    Ok(())
}

fn print_summary<C: SetupProfile>(config: &C, root: &Path, stats: &RunStats) -> Result<()> {
    let summary = stats
        .summary()
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value.to_string().green()))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Summary", summary)?;

    let docs = config
        .docs()
        .iter()
        .map(|doc| format!("{} - {}", doc.file_name().magenta(), doc.summary()))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Documentation", docs)?;

    let steps = config.next_steps(root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Ready to copy code!")?;

    Ok(())
}
