//! The per-invocation build model.
//!
//! A [`BuildConfiguration`] is built once in `main` and handed by reference to
//! every operation. It never changes after construction.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::invocation::Invocation;
use crate::config::{self, ForgeConfig};
use crate::toolchain::{self, Platform};

pub const SOURCE_DIR: &str = "src";
pub const BUILD_DIR: &str = "build";
pub const OUTPUT_NAME: &str = "application";

#[derive(Debug, Clone)]
pub struct BuildConfiguration {
    platform: Platform,
    compiler: String,
    flags: Vec<String>,
    extra_libs: Vec<String>,
    root: PathBuf,
    src_dir: PathBuf,
    build_dir: PathBuf,
    imgui_dir: PathBuf,
    output: PathBuf,
}

impl BuildConfiguration {
    /// Builds the configuration for the project rooted at `root`.
    ///
    /// The compiler comes from `config`, then the `CXX` environment variable,
    /// then `clang++`.
    pub fn new(root: impl Into<PathBuf>, platform: Platform, config: &ForgeConfig) -> Self {
        let root = root.into();
        let src_dir = root.join(SOURCE_DIR);
        let build_dir = root.join(BUILD_DIR);
        let imgui_dir = root.join("thirdparty").join("imgui");
        let output = build_dir.join(OUTPUT_NAME);

        let compiler =
            toolchain::resolve_compiler(config.compiler(), std::env::var("CXX").ok());

        let mut flags = toolchain::fixed_flags();
        flags.extend(config.extra_flags().iter().cloned());

        let extra_libs = config
            .extra_libs()
            .iter()
            .map(|lib| toolchain::library_arg(lib))
            .collect();

        Self {
            platform,
            compiler,
            flags,
            extra_libs,
            root,
            src_dir,
            build_dir,
            imgui_dir,
            output,
        }
    }

    /// Detects the host platform and reads `appforge.toml` from `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let project = config::load_config(root)
            .with_context(|| format!("Failed to load project at {}", root.display()))?;
        Ok(Self::new(root, Platform::detect(), &project))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Fixed flags followed by any project-file flags.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn imgui_dir(&self) -> &Path {
        &self.imgui_dir
    }

    /// Always `<build>/application`, on every platform.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    pub fn include_args(&self) -> Vec<OsString> {
        vec![
            toolchain::include_arg(&self.src_dir),
            toolchain::include_arg(&self.imgui_dir),
        ]
    }

    /// Platform link set followed by project-file libraries.
    pub fn libraries(&self) -> Vec<String> {
        let mut libs = toolchain::platform_libraries(self.platform);
        libs.extend(self.extra_libs.iter().cloned());
        libs
    }

    /// Assembles the complete compiler command line for `sources`.
    pub fn invocation(&self, sources: &[PathBuf]) -> Invocation {
        let mut invocation = Invocation::new(&self.compiler);
        invocation.args(&self.flags);
        invocation.args(self.include_args());
        invocation.args(sources);
        invocation.args(self.libraries());
        invocation.arg("-o");
        invocation.arg(&self.output);
        invocation
    }
}
