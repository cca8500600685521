pub mod local_filesystem;
pub mod process_command;

pub use local_filesystem::LocalFilesystem;
pub use process_command::ProcessCommandAdapter;
