//! Stand-in executables that record how they were invoked.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable shell script that appends `<name> <args>` to `log`
/// and exits with `default_code`, or with the code mapped to its first
/// argument in `failures`.
pub(crate) fn write_fake_tool(
    bin_dir: &Path,
    name: &str,
    log: &Path,
    default_code: i32,
    failures: &[(&str, i32)],
) -> PathBuf {
    let mut cases = String::new();
    for (arg, code) in failures {
        cases.push_str(&format!("  {}) exit {} ;;\n", arg, code));
    }

    let script = format!(
        "#!/bin/sh\necho \"{name} $*\" >> \"{log}\"\ncase \"$1\" in\n{cases}esac\nexit {default_code}\n",
        log = log.display(),
    );

    let path = bin_dir.join(name);
    fs::write(&path, script).expect("Failed to write fake tool");
    let mut perms = fs::metadata(&path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to make fake tool executable");
    path
}
