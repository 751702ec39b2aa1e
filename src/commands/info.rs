//! Info command handler
//!
//! Handles `appforge info`: shows what a build would use without running it.

use colored::*;

use crate::build::{BuildConfiguration, find_sources};

pub fn show_info(config: &BuildConfiguration) {
    println!("{} Project Info", "📋".blue());
    println!("-------------------------------");

    println!(
        "Platform:   {} ({})",
        config.platform().to_string().green(),
        std::env::consts::ARCH.cyan()
    );

    print!("Compiler:   {} ", config.compiler().bold());
    if std::process::Command::new(config.compiler())
        .arg("--version")
        .output()
        .is_ok()
    {
        println!("{}", "Found".green());
    } else {
        println!("{}", "Not Found".red());
    }

    println!("Flags:      {}", config.flags().join(" "));
    println!("Libraries:  {}", config.libraries().join(" "));
    println!("Root:       {}", config.root().display());

    let sources = find_sources(config.src_dir());
    let count = if sources.is_empty() {
        "none".red()
    } else {
        sources.len().to_string().green()
    };
    println!("Sources:    {} ({})", config.src_dir().display(), count);

    print!("ImGui:      {} ", config.imgui_dir().display());
    if config.imgui_dir().is_dir() {
        println!("{}", "Found".green());
    } else {
        println!("{}", "Not Found".yellow());
    }

    let built = if config.output_path().exists() {
        "built".green()
    } else {
        "not built".yellow()
    };
    println!("Output:     {} ({})", config.output_path().display(), built);
}
