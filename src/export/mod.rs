//! Rendering built trees to their textual storage form.

mod storage;

pub use storage::{StorageError, to_standalone, to_storage};
