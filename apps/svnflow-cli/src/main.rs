//! svnflow CLI - branching workflow for Subversion
//!
//! Command-line interface for svnflow: bootstraps the canonical repository
//! layout, checks it, and starts and finishes feature branches.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};
use svnflow_core::{FlowConfig, FlowRuntime, HealthReport};
use tracing::{debug, error, info};

/// svnflow - git-flow style branching on top of Subversion
///
/// Run inside an svn working copy. The working copy root is the one the svn
/// client reports, or the topmost directory of the enclosing chain of `.svn`
/// directories when the client cannot tell.
#[derive(Parser)]
#[command(name = "svnflow", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available svnflow commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize the svn repository to work with svnflow
    ///
    /// Creates trunk, tags and branches/{develop,feature,release,hotfix},
    /// committing each missing directory. develop starts as a copy of trunk.
    Init,

    /// Check that the repository layout is intact
    ///
    /// Prints OK or FAIL for every canonical path and exits with 1 if any
    /// check fails.
    Test {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Work with feature branches
    Feature {
        #[command(subcommand)]
        action: Option<FeatureCommand>,
    },
}

/// Feature branch commands
#[derive(Subcommand)]
enum FeatureCommand {
    /// Create a new branch off develop named branches/feature/<name>
    Start {
        /// Feature name
        name: String,
    },

    /// Merge branches/feature/<name> back to develop
    Finish {
        /// Feature name
        name: String,
    },

    /// List existing feature branches
    List,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match run_command(command) {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Maps clap errors onto svnflow's exit codes.
///
/// Help and version requests exit 0. An unknown `feature` subcommand prints
/// the feature usage and exits 0. Anything else, including a missing or
/// extra argument to a feature subcommand, exits 1.
fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand if invoked_feature() => {
            let _ = e.print();
            print_feature_usage();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}

fn invoked_feature() -> bool {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .is_some_and(|arg| arg == "feature")
}

/// Initialize tracing subscriber for structured logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("svnflow=debug,svnflow_core=debug")
    } else {
        EnvFilter::new("svnflow=info,svnflow_core=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the specified command
fn run_command(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Init => run_init(),
        Commands::Test { json } => run_test(json),
        Commands::Feature { action } => match action {
            Some(FeatureCommand::Start { name }) => run_feature_start(&name),
            Some(FeatureCommand::Finish { name }) => run_feature_finish(&name),
            Some(FeatureCommand::List) => run_feature_list(),
            None => {
                print_feature_usage();
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

/// Run the init command
fn run_init() -> Result<ExitCode> {
    let runtime = load_runtime()?;

    let summary = runtime
        .init()
        .context("Failed to initialize repository layout")?;

    println!(
        "✔ Repository initialized for svnflow ({} created, {} already present)",
        summary.created.len(),
        summary.skipped.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Run the test command
fn run_test(json: bool) -> Result<ExitCode> {
    let runtime = load_runtime()?;
    let report = runtime.check_layout();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print_report(&report);
    }

    Ok(ExitCode::from(report.exit_code() as u8))
}

/// Run the feature start command
fn run_feature_start(name: &str) -> Result<ExitCode> {
    let runtime = load_runtime()?;

    let branch = runtime
        .start_feature(name)
        .with_context(|| format!("Failed to start feature '{}'", name))?;

    println!("✔ Created {}", branch.display());
    Ok(ExitCode::SUCCESS)
}

/// Run the feature finish command
fn run_feature_finish(name: &str) -> Result<ExitCode> {
    let runtime = load_runtime()?;

    runtime
        .finish_feature(name)
        .with_context(|| format!("Failed to finish feature '{}'", name))?;

    println!("✔ Merged feature '{}' to develop", name);
    Ok(ExitCode::SUCCESS)
}

/// Run the feature list command
fn run_feature_list() -> Result<ExitCode> {
    let runtime = load_runtime()?;

    for name in runtime.list_features().context("Failed to list features")? {
        println!("{}", name);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &HealthReport) {
    for check in &report.checks {
        println!("{} [{}]", check.path.display(), check.status);
        if let Some(message) = &check.error {
            eprintln!("Error: {}", message);
        }
    }
}

fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
}

fn print_feature_usage() {
    let mut cmd = Cli::command();
    if let Some(feature) = cmd.find_subcommand_mut("feature") {
        let _ = feature.print_help();
    }
}

/// Locate the working copy, load its config and build the runtime
fn load_runtime() -> Result<FlowRuntime> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let walked_root = find_repo_root(&current_dir)
        .context("Failed to find working copy root - are you in an svn working copy?")?;

    let mut config =
        FlowConfig::load(walked_root).context("Failed to load svnflow configuration")?;

    // svn knows where a checkout nested inside another working copy starts
    if let Some(wc_root) = query_wc_root(&config.svn.binary, &current_dir)
        && wc_root != config.repo_root
    {
        debug!(
            walked = %config.repo_root.display(),
            "svn reports a different working copy root"
        );
        config = FlowConfig::load(wc_root).context("Failed to load svnflow configuration")?;
    }

    info!("Working copy root: {}", config.repo_root.display());
    Ok(FlowRuntime::new(config))
}

/// Ask the svn client for the working copy root of `start`
///
/// Returns `None` when the client is missing, predates `--show-item`
/// (svn < 1.9), or does not recognize `start` as part of a working copy.
fn query_wc_root(binary: &str, start: &Path) -> Option<PathBuf> {
    let output = Command::new(binary)
        .args(["info", "--non-interactive", "--show-item", "wc-root"])
        .arg(start)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let root = String::from_utf8(output.stdout).ok()?;
    let root = root.trim();
    (!root.is_empty()).then(|| PathBuf::from(root))
}

/// Find the working copy root by searching for .svn directories
///
/// Returns the topmost directory of the contiguous run of ancestors that
/// contain `.svn`, which covers both single-.svn (1.7+) and per-directory
/// working copies. A separate 1.7+ checkout placed directly inside another
/// working copy's root is indistinguishable from a per-directory layout
/// here and resolves to the outer root; [`query_wc_root`] corrects that
/// when the svn client is available.
fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let mut root = None;

    for dir in start.ancestors() {
        if dir.join(".svn").is_dir() {
            root = Some(dir.to_path_buf());
        } else if root.is_some() {
            break;
        }
    }

    root.ok_or_else(|| anyhow::anyhow!("Not an svn working copy (or any parent up to mount point)"))
}
