//! # appforge - build, run and clean an SDL3 + Dear ImGui application
//!
//! appforge wraps a single compiler call. It collects every `src/**/*.cpp`,
//! adds the fixed flags, the include paths and the link libraries of the
//! host platform, and writes the result to `build/application`.
//!
//! ## Quick Start
//!
//! ```bash
//! appforge          # build
//! appforge run      # run build/application
//! appforge clean    # remove build/
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Build, run and clean operations
//! - [`config`] - Optional `appforge.toml` project file
//! - [`toolchain`] - Platform detection, compiler flags and libraries
//! - [`commands`] - Auxiliary CLI command handlers

/// Build, run and clean operations.
pub mod build;

/// Auxiliary CLI command handlers.
pub mod commands;

/// Project file parsing (`appforge.toml`).
pub mod config;

/// Error types raised by appforge itself.
pub mod error;

/// Platform detection and compiler arguments.
pub mod toolchain;
