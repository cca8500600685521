//! Shared testing harness for `entrykit` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools::write_fake_tool;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// File every fake tool appends its invocation to.
    pub(crate) fn invocation_log(&self) -> PathBuf {
        self.root.path().join("invocations.log")
    }

    /// Lines recorded by fake tools, in invocation order.
    pub(crate) fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.invocation_log()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Install a fake tool that exits with `code` for every invocation.
    pub(crate) fn fake_tool(&self, name: &str, code: i32) -> PathBuf {
        write_fake_tool(&self.bin_dir, name, &self.invocation_log(), code, &[])
    }

    /// Install a fake management CLI that fails the listed subcommands.
    pub(crate) fn fake_manage(&self, failures: &[(&str, i32)]) -> PathBuf {
        write_fake_tool(&self.bin_dir, "manage", &self.invocation_log(), 0, failures)
    }

    /// Write `entrykit.toml` in the work directory and return its path.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("entrykit.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Config pointing the app bootstrapper at a fake `manage` and server.
    pub(crate) fn app_config(&self, manage: &Path, server: &Path) -> PathBuf {
        self.write_config(&format!(
            "[app]\nmanager = [\"{}\"]\n\n[app.server]\nprogram = \"{}\"\n",
            manage.display(),
            server.display()
        ))
    }

    /// Config pointing the gateway bootstrapper at a fake server and at
    /// template/output files inside the work directory.
    pub(crate) fn gateway_config(&self, server: &Path) -> PathBuf {
        self.write_config(&format!(
            "[gateway]\ntemplate = \"{}\"\noutput = \"{}\"\nprogram = \"{}\"\n",
            self.template_path().display(),
            self.output_path().display(),
            server.display()
        ))
    }

    pub(crate) fn template_path(&self) -> PathBuf {
        self.work_dir.join("default.conf.tpl")
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.work_dir.join("conf.d/default.conf")
    }

    pub(crate) fn write_template(&self, content: impl AsRef<[u8]>) {
        fs::write(self.template_path(), content).expect("Failed to write template");
    }

    pub(crate) fn rendered_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Rendered output should exist")
    }

    pub(crate) fn rendered_output_bytes(&self) -> Vec<u8> {
        fs::read(self.output_path()).expect("Rendered output should exist")
    }

    /// Build a command for invoking the compiled `entrykit` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("entrykit").expect("Failed to locate entrykit binary");
        cmd.current_dir(&self.work_dir).env_remove("ENTRYKIT_CONFIG").env_remove("ENTRYKIT_LOG");
        cmd
    }
}
