//! Throwaway projects and shell stub compilers for the build tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::BuildConfiguration;
use crate::config::{BuildSection, ForgeConfig};
use crate::toolchain::Platform;

pub const COMPILER_LOG: &str = "compiler.log";
pub const RUN_LOG: &str = "runs.log";

/// An empty project directory, optionally with `src/main.cpp`.
pub fn project(with_main: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    if with_main {
        fs::write(dir.path().join("src").join("main.cpp"), "int main() { return 0; }").unwrap();
    }
    dir
}

/// Writes a fake compiler that logs each call and exits with `exit`. On
/// success it drops a shell script at the `-o` path exiting with `app_exit`.
pub fn stub_compiler(root: &Path, exit: i32, app_exit: i32) -> PathBuf {
    let compiler_log = root.join(COMPILER_LOG);
    let run_log = root.join(RUN_LOG);
    let script = format!(
        r#"#!/bin/sh
echo invoked >> '{log}'
out=""
while [ "$#" -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
if [ {exit} -eq 0 ] && [ -n "$out" ]; then
cat > "$out" <<'APP'
#!/bin/sh
echo "$0" >> '{runs}'
exit {app_exit}
APP
chmod +x "$out"
fi
exit {exit}
"#,
        log = compiler_log.display(),
        runs = run_log.display(),
    );

    let path = root.join("fake-cxx.sh");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn configuration(root: &Path, compiler: &Path) -> BuildConfiguration {
    let config = ForgeConfig {
        build: Some(BuildSection {
            compiler: Some(compiler.to_string_lossy().to_string()),
            ..Default::default()
        }),
    };
    BuildConfiguration::new(root, Platform::detect(), &config)
}

/// Lines appended to `name` by the stubs, empty if never written.
pub fn log_lines(root: &Path, name: &str) -> Vec<String> {
    fs::read_to_string(root.join(name))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
