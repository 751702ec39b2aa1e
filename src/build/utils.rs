use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use walkdir::WalkDir;

use crate::error::ForgeError;

/// Extension of the files handed to the compiler.
pub const SOURCE_EXTENSION: &str = "cpp";

// --- Helper: Collect Source Files ---
/// Every `*.cpp` file below `src_dir`, in traversal order. A missing
/// directory yields an empty list. Entries that cannot be read are skipped
/// with a warning.
pub fn find_sources(src_dir: &Path) -> Vec<PathBuf> {
    let (sources, errors) = scan_sources(src_dir);
    for err in &errors {
        eprintln!("{} Skipping unreadable entry: {}", "!".yellow(), err);
    }
    sources
}

/// Like [`find_sources`], but hands back the walk errors instead of printing
/// them. Symlinks count when they resolve to a regular file.
pub fn scan_sources(src_dir: &Path) -> (Vec<PathBuf>, Vec<walkdir::Error>) {
    let mut sources = Vec::new();
    let mut errors = Vec::new();
    if !src_dir.exists() {
        return (sources, errors);
    }

    for entry in WalkDir::new(src_dir) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                let is_source = path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION);
                if is_source && path.is_file() {
                    sources.push(entry.into_path());
                }
            }
            Err(err) => errors.push(err),
        }
    }
    (sources, errors)
}

// --- Helper: Run External Process ---
/// Runs `cmd` with the console inherited and blocks until it exits.
pub fn run_to_completion(mut cmd: Command) -> Result<i32> {
    let program = cmd.get_program().to_string_lossy().to_string();
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ForgeError::Spawn { program, source })?;
    Ok(exit_code(status))
}

/// Maps a child status onto our own exit code. Signals become `128 + n` on
/// Unix, anything else without a code becomes 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
