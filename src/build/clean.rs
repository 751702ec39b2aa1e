//! Build artifact cleanup.
//!
//! Only the output binary is expected in the build directory, so entries are
//! removed one level deep as files. Anything else (a nested directory, a
//! read-only entry) is reported rather than skipped.

use anyhow::Result;
use colored::*;
use std::fs;

use super::configuration::BuildConfiguration;
use crate::error::ForgeError;

/// Removes the build directory. Returns `false` when there was nothing to do.
pub fn clean(config: &BuildConfiguration) -> Result<bool> {
    let build_dir = config.build_dir();
    if !build_dir.exists() {
        println!("{} Nothing to clean", "!".yellow());
        return Ok(false);
    }

    println!("{} Cleaning {}", "🗑️".red(), build_dir.display());
    let entries = fs::read_dir(build_dir).map_err(|e| ForgeError::filesystem(build_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ForgeError::filesystem(build_dir, e))?;
        let path = entry.path();
        fs::remove_file(&path).map_err(|e| ForgeError::filesystem(&path, e))?;
    }
    fs::remove_dir(build_dir).map_err(|e| ForgeError::filesystem(build_dir, e))?;

    println!("{} Clean complete.", "✓".green());
    Ok(true)
}
