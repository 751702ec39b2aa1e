use anyhow::Result;
use colored::*;
use std::process::Command;

use super::configuration::BuildConfiguration;
use super::utils::run_to_completion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No binary at the output path; nothing was started.
    NotBuilt,
    /// The application ran and exited with this status.
    Exited(i32),
}

impl RunOutcome {
    /// A missing binary is reported, not treated as a failure.
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::NotBuilt => 0,
            RunOutcome::Exited(code) => code,
        }
    }
}

// --- COMMAND: Run ---
pub fn run_application(config: &BuildConfiguration, args: &[String]) -> Result<RunOutcome> {
    let bin_path = config.output_path();
    if !bin_path.exists() {
        println!(
            "{} Application not built yet ({}). Run a build first.",
            "!".yellow(),
            bin_path.display()
        );
        return Ok(RunOutcome::NotBuilt);
    }

    println!("{} Running...\n", "▶".green());
    let mut run_cmd = Command::new(bin_path);
    run_cmd.args(args);
    let code = run_to_completion(run_cmd)?;
    Ok(RunOutcome::Exited(code))
}
