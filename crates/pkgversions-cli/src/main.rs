//! CLI entry point for package-versions.
//!
//! This module is intentionally thin: it handles argument parsing, logging, I/O, and exit
//! codes. All business logic lives in the `pkgversions-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pkgversions_app::{
    FsSink, LifecycleEvent, Project, ProjectInput, dispatch, load_project, run_lookup,
    run_lookup_composer_version, run_render,
};
use pkgversions_lock::RootInput;
use pkgversions_settings::Overrides;
use std::process::Command;

use crate::logging::{LogConfig, LogFormat, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "package-versions",
    version,
    about = "Generate a runtime lookup of installed package versions from the lock file"
)]
struct Cli {
    /// Project root (directory containing composer.json and composer.lock).
    #[arg(long, default_value = ".", global = true)]
    project_root: Utf8PathBuf,

    /// Path to the package-versions config TOML, relative to the project root.
    #[arg(long, default_value = "package-versions.toml", global = true)]
    config: Utf8PathBuf,

    /// Override the vendor directory.
    #[arg(long, global = true)]
    vendor_dir: Option<String>,

    /// Root package version when composer.json declares none.
    #[arg(long, env = "COMPOSER_ROOT_VERSION", global = true)]
    root_version: Option<String>,

    /// Root package source reference (defaults to `git rev-parse HEAD`).
    #[arg(long, global = true)]
    root_reference: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the versions module (what the install/update hooks run).
    Generate {
        /// Lifecycle event being handled (post-install-cmd or post-update-cmd).
        #[arg(long, default_value = "post-install-cmd")]
        event: String,

        /// Write here instead of the located install path.
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Print the versions module to stdout without writing it.
    Show,

    /// Print the version identifier of one package.
    Lookup {
        /// Package name, e.g. `psr/log`.
        package: String,

        /// Print only the version, without the `@<reference>` part.
        #[arg(long)]
        composer_version: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_format));

    let result = match &cli.cmd {
        Commands::Generate { event, output } => cmd_generate(&cli, event, output.clone()),
        Commands::Show => cmd_show(&cli),
        Commands::Lookup {
            package,
            composer_version,
        } => cmd_lookup(&cli, package, *composer_version),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("package-versions error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_generate(cli: &Cli, event: &str, output: Option<String>) -> anyhow::Result<i32> {
    let event: LifecycleEvent = event.parse()?;
    let project = load(cli, output)?;

    dispatch(event, &project.source, &project.target, &mut FsSink)
        .context("generate versions module")?;
    Ok(0)
}

fn cmd_show(cli: &Cli) -> anyhow::Result<i32> {
    let project = load(cli, None)?;
    let (_, text) = run_render(&project.source);
    print!("{}", text);
    Ok(0)
}

fn cmd_lookup(cli: &Cli, package: &str, composer_version: bool) -> anyhow::Result<i32> {
    let project = load(cli, None)?;

    let found = if composer_version {
        run_lookup_composer_version(&project.source, package)
    } else {
        run_lookup(&project.source, package).map(|id| id.into_string())
    };

    match found {
        Ok(version) => {
            println!("{}", version);
            Ok(0)
        }
        Err(not_found) => {
            eprintln!("{}", not_found);
            Ok(1)
        }
    }
}

fn load(cli: &Cli, output: Option<String>) -> anyhow::Result<Project> {
    let project_root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());
    if !project_root.exists() {
        anyhow::bail!("project root does not exist: {}", project_root);
    }

    // Missing config file is allowed (defaults apply); any other read error is fatal.
    let cfg_path = project_root.join(&cli.config);
    let cfg_text = match std::fs::read_to_string(&cfg_path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read {}", cfg_path)),
    };

    let root_reference = cli
        .root_reference
        .clone()
        .or_else(|| git_head(&project_root));

    load_project(ProjectInput {
        project_root: &project_root,
        config_text: &cfg_text,
        overrides: Overrides {
            vendor_dir: cli.vendor_dir.clone(),
            output,
        },
        root_input: RootInput {
            version: cli.root_version.clone(),
            source_reference: root_reference,
        },
    })
}

/// Commit checked out in `repo_root`, if it is a git work tree.
fn git_head(repo_root: &Utf8Path) -> Option<String> {
    let output = Command::new("git")
        .current_dir(repo_root)
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        tracing::debug!("git rev-parse HEAD failed; root source reference left empty");
        return None;
    }

    let head = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!head.is_empty()).then_some(head)
}
