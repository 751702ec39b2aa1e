mod clean;
mod configuration;
mod core;
mod invocation;
mod run;
pub mod utils;

#[cfg(all(test, unix))]
mod test_support;

pub use clean::clean;
pub use configuration::{BUILD_DIR, BuildConfiguration, OUTPUT_NAME, SOURCE_DIR};
pub use core::{BuildOptions, build_project};
pub use invocation::Invocation;
pub use run::{RunOutcome, run_application};
pub use utils::{find_sources, scan_sources};
