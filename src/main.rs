//! # appforge CLI Entry Point
//!
//! Parses arguments with clap, builds the [`BuildConfiguration`] once and
//! hands it to the selected operation. The process exit code is whatever the
//! operation reports: the compiler's or the application's own status for
//! build and run, 1 for failures inside appforge, 2 for usage errors.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use appforge::build::{self, BuildConfiguration, BuildOptions};
use appforge::commands;

#[derive(Parser)]
#[command(name = "appforge")]
#[command(about = "Build, run and clean an SDL3 + Dear ImGui application", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long = "directory", global = true)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the application (the default when no command is given)
    Build {
        /// Show the compiler command without running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Run the compiled application
    Run {
        /// Arguments passed to the application, after `--`
        #[arg(last = true, num_args = 0..)]
        args: Vec<String>,
    },
    /// Remove the build directory
    Clean,
    /// Show platform, compiler and project layout
    Info,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "x".red(), e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32> {
    let load_config = || -> Result<BuildConfiguration> {
        let current_dir = std::env::current_dir()?;
        let root = match &cli.directory {
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        };
        BuildConfiguration::load(&root)
    };

    match cli.command {
        None => build::build_project(&load_config()?, &BuildOptions::default()),
        Some(Commands::Build { dry_run }) => {
            build::build_project(&load_config()?, &BuildOptions { dry_run })
        }
        Some(Commands::Run { args }) => {
            Ok(build::run_application(&load_config()?, &args)?.exit_code())
        }
        Some(Commands::Clean) => {
            build::clean(&load_config()?)?;
            Ok(0)
        }
        Some(Commands::Info) => {
            commands::info::show_info(&load_config()?);
            Ok(0)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(0)
        }
    }
}
