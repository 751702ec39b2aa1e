use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by appforge itself, as opposed to a non-zero status
/// reported by the compiler or the application.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Source discovery came back empty, so the compiler was never started.
    #[error("no source files found in {}", dir.display())]
    NoSources { dir: PathBuf },

    /// An external program could not be started at all.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Creating or removing a build artifact failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ForgeError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ForgeError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
