//! Compiler selection and the platform-dependent parts of the command line.
//!
//! The fixed flags are the same everywhere; only the link libraries depend
//! on the detected [`Platform`].

pub mod types;

pub use types::Platform;

use std::ffi::OsString;
use std::path::Path;

pub const DEFAULT_COMPILER: &str = "clang++";

/// Language standard, optimization, debug info and warnings.
pub const FIXED_FLAGS: [&str; 5] = ["-std=c++17", "-O2", "-g", "-Wall", "-Wextra"];

/// Picks the compiler: project file first, then `CXX`, then `clang++`.
pub fn resolve_compiler(configured: Option<&str>, env_cxx: Option<String>) -> String {
    if let Some(compiler) = configured {
        return compiler.to_string();
    }
    match env_cxx {
        Some(cxx) if !cxx.trim().is_empty() => cxx,
        _ => DEFAULT_COMPILER.to_string(),
    }
}

pub fn fixed_flags() -> Vec<String> {
    FIXED_FLAGS.iter().map(|f| f.to_string()).collect()
}

/// `-I<dir>`, built without going through UTF-8.
pub fn include_arg(dir: &Path) -> OsString {
    let mut arg = OsString::from("-I");
    arg.push(dir);
    arg
}

/// Link arguments required by the SDL3 + ImGui stack on `platform`.
pub fn platform_libraries(platform: Platform) -> Vec<String> {
    let libs: &[&str] = match platform {
        Platform::Windows => &["-lSDL3", "-limm32", "-loleaut32"],
        Platform::MacOs => &["-lSDL3", "-framework", "Cocoa"],
        Platform::Other => &["-lSDL3", "-ldl", "-lpthread"],
    };
    libs.iter().map(|l| l.to_string()).collect()
}

pub fn library_arg(name: &str) -> String {
    format!("-l{}", name)
}
