mod filesystem;
mod process_runner;

pub use filesystem::Filesystem;
pub use process_runner::ProcessRunner;
