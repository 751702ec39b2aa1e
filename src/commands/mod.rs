//! CLI command handlers that are not build operations themselves.

pub mod info;
