pub mod adapters;
pub mod assets;

pub use adapters::{LocalFilesystem, ProcessCommandAdapter};
