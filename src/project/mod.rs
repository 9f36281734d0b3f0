//! Loading source files from disk into a session.

mod file_loader;

pub use file_loader::{LoadError, collect_source_paths, is_source_path, load_buffer, load_directory};
