use crate::ports::{Filesystem, ProcessRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ProcessRunner, F: Filesystem> {
    runner: R,
    filesystem: F,
}

impl<R: ProcessRunner, F: Filesystem> AppContext<R, F> {
    /// Create a new application context.
    pub fn new(runner: R, filesystem: F) -> Self {
        Self { runner, filesystem }
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
