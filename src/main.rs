use crate::{
    builder::archive::{ArchiveSummary, build_archive},
    error::ModpackError,
    types::choice::BumpChoice,
    utils::{
        fs::get_cwd,
        logger::{LogLevel, Logger},
        signature::get_signature,
        spinner::{run_step, with_spinner},
        version::get_version,
    },
    versioning::{
        manage::{run_version_step, show_version},
        prompt::{ChoicePrompter, FixedPrompter, InquirePrompter, LinePrompter},
    },
};
use anyhow::Context;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod builder;
mod error;
mod types;
mod utils;
mod versioning;

#[derive(Parser)]
#[command(name = "modpack")]
#[command(author = "Labscend Studios")]
#[command(about = "Bump a content pack's manifest version and package it as a zip")]
struct Cli {
    /// Directory whose files are packaged
    #[arg(long, global = true, env = "MODPACK_SOURCE", default_value = "pack")]
    source: PathBuf,

    /// Archive to write
    #[arg(long, global = true, env = "MODPACK_OUTPUT", default_value = "dist/modpack.zip")]
    output: PathBuf,

    /// Manifest file name, relative to the source directory
    #[arg(long, global = true, env = "MODPACK_MANIFEST", default_value = "manifest.json")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optionally bump the manifest version, then zip the source directory (default)
    Build {
        /// Apply this bump instead of prompting
        #[arg(long, value_enum)]
        bump: Option<BumpChoice>,
        /// Package without touching the manifest
        #[arg(long, default_value_t = false, conflicts_with = "bump")]
        skip_version: bool,
    },

    /// Bump the manifest version without packaging
    Bump {
        /// Bump type: patch | minor | major | none. Prompts when omitted.
        #[arg(value_enum)]
        kind: Option<BumpChoice>,
    },

    /// Show the current manifest version and the bump candidates
    Show {},
}

struct Paths {
    source: PathBuf,
    output: PathBuf,
    output_display: PathBuf,
    manifest: PathBuf,
}

impl Paths {
    fn resolve(cli: &Cli, cwd: &Path) -> Self {
        let source = cwd.join(&cli.source);
        Paths {
            manifest: source.join(&cli.manifest),
            output: cwd.join(&cli.output),
            output_display: cli.output.clone(),
            source,
        }
    }
}

fn main() -> ExitCode {
    let version = get_version();
    let signature = get_signature(&version);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature);
        return ExitCode::SUCCESS;
    }

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let cmd = Cli::command()
        .version(version_static)
        .before_help(signature_static);
    let matches = cmd.get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Logger::new().log_message(LogLevel::Error, &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = get_cwd()?;
    let paths = Paths::resolve(&cli, &cwd);

    match cli.command {
        None => build(&paths, None, false),
        Some(Commands::Build { bump, skip_version }) => build(&paths, bump, skip_version),
        Some(Commands::Bump { kind }) => {
            run_version_step(&paths.manifest, prompter_for(kind).as_mut())?;
            Ok(())
        }
        Some(Commands::Show {}) => {
            show_version(&paths.manifest)?;
            Ok(())
        }
    }
}

fn build(paths: &Paths, bump: Option<BumpChoice>, skip_version: bool) -> anyhow::Result<()> {
    Logger::new().log_message(LogLevel::Info, "Creating modpack...");

    // Checked up front so a missing source never costs a manifest rewrite.
    if !paths.source.is_dir() {
        return Err(ModpackError::not_found("Source directory", &paths.source).into());
    }

    if !skip_version {
        if paths.manifest.is_file() || bump.is_some() {
            run_version_step(&paths.manifest, prompter_for(bump).as_mut())?;
        } else {
            Logger::new().log_message(
                LogLevel::Warning,
                &format!(
                    "No manifest at {}, skipping version bump",
                    paths.manifest.display()
                ),
            );
        }
    }

    let spinner = with_spinner(&format!("Packing {}...", paths.source.display()));
    run_step(
        spinner,
        |summary: &ArchiveSummary| {
            format!(
                "Modpack created successfully: {} ({} files)",
                paths.output_display.display(),
                summary.entries.len()
            )
        },
        |sp| {
            build_archive(&paths.source, &paths.output, |rel| {
                sp.log(LogLevel::Info, &format!("Added: {}", rel))
            })
        },
    )
    .with_context(|| format!("Failed to package {}", paths.source.display()))?;

    Ok(())
}

/// Picks where the bump choice comes from: the command line, a terminal
/// prompt, or lines read from piped stdin.
fn prompter_for(choice: Option<BumpChoice>) -> Box<dyn ChoicePrompter> {
    match choice {
        Some(choice) => Box::new(FixedPrompter::new(choice)),
        None if std::io::stdin().is_terminal() => Box::new(InquirePrompter),
        None => Box::new(LinePrompter::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        )),
    }
}
