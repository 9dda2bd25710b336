//! Storage layer for stepform
//!
//! A small string key-value store with an in-memory and a JSON file backend.

pub mod file_io;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use tracing::warn;

use crate::config::paths::StepformPaths;

/// Open the on-disk store, starting over if the state file is unreadable
pub fn open_state_store(paths: &StepformPaths) -> JsonFileStore {
    let path = paths.state_file();
    match JsonFileStore::open(&path) {
        Ok(store) => store,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable state file");
            JsonFileStore::empty(path)
        }
    }
}
