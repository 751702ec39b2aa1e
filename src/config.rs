//! Optional project file (`appforge.toml`).
//!
//! Nothing in here is required: a project without the file builds with the
//! stock compiler, flags and libraries.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "appforge.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ForgeConfig {
    pub build: Option<BuildSection>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct BuildSection {
    /// Compiler executable, overrides `CXX` and the `clang++` default.
    pub compiler: Option<String>,
    /// Appended after the fixed flags.
    pub flags: Option<Vec<String>>,
    /// Bare library names, linked as `-l<name>` after the platform set.
    pub libs: Option<Vec<String>>,
}

impl ForgeConfig {
    pub fn compiler(&self) -> Option<&str> {
        self.build.as_ref()?.compiler.as_deref()
    }

    pub fn extra_flags(&self) -> &[String] {
        self.build
            .as_ref()
            .and_then(|b| b.flags.as_deref())
            .unwrap_or_default()
    }

    pub fn extra_libs(&self) -> &[String] {
        self.build
            .as_ref()
            .and_then(|b| b.libs.as_deref())
            .unwrap_or_default()
    }
}

/// Reads `appforge.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<ForgeConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ForgeConfig::default());
    }

    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&config_str).with_context(|| {
        format!(
            "Failed to parse {} - check for syntax errors (missing quotes, brackets)",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.compiler(), None);
        assert!(config.extra_flags().is_empty());
        assert!(config.extra_libs().is_empty());
    }

    #[test]
    fn test_full_build_section() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[build]
compiler = "g++"
flags = ["-DIMGUI_ENABLE_FREETYPE"]
libs = ["freetype"]
"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.compiler(), Some("g++"));
        assert_eq!(config.extra_flags(), ["-DIMGUI_ENABLE_FREETYPE"]);
        assert_eq!(config.extra_libs(), ["freetype"]);
    }

    #[test]
    fn test_empty_build_section() {
        let config: ForgeConfig = toml::from_str("[build]\n").unwrap();
        assert!(config.build.is_some());
        assert_eq!(config.compiler(), None);
        assert!(config.extra_flags().is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[build\ncompiler = ").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse"));
    }
}
