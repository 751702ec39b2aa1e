use anyhow::Result;
use colored::*;
use std::fs;
use std::time::Instant;

use super::configuration::BuildConfiguration;
use super::utils::{find_sources, run_to_completion};
use crate::error::ForgeError;

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Print the compiler command without creating or running anything.
    pub dry_run: bool,
}

// --- CORE: Build Project ---
/// Compiles every source into `<build>/application` with a single compiler
/// call and returns the compiler's exit status unchanged.
pub fn build_project(config: &BuildConfiguration, options: &BuildOptions) -> Result<i32> {
    let start_time = Instant::now();
    println!(
        "{} Building for {} with {}...",
        "🔧".cyan(),
        config.platform().to_string().bold(),
        config.compiler()
    );

    // 1. Setup Directories
    if !options.dry_run {
        let build_dir = config.build_dir();
        fs::create_dir_all(build_dir).map_err(|e| ForgeError::filesystem(build_dir, e))?;
    }

    // 2. Collect Source Files
    let sources = find_sources(config.src_dir());
    if sources.is_empty() {
        return Err(ForgeError::NoSources {
            dir: config.src_dir().to_path_buf(),
        }
        .into());
    }

    // 3. Compile & Link
    let invocation = config.invocation(&sources);
    println!("   {} {}", "Command:".dimmed(), invocation);

    if options.dry_run {
        println!(
            "{} Dry run: {} source file(s), compiler not started",
            "!".yellow(),
            sources.len()
        );
        return Ok(0);
    }

    let code = run_to_completion(invocation.to_command())?;
    if code == 0 {
        println!(
            "{} Build finished in {:.2?} -> {}",
            "✓".green(),
            start_time.elapsed(),
            config.output_path().display()
        );
    } else {
        eprintln!("{} Build failed (compiler exited with status {})", "x".red(), code);
    }

    Ok(code)
}
