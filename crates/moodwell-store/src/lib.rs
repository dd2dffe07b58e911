//! Key-value storage collaborator and persisted record types

mod error;
mod io;
mod keys;
mod kv;
mod paths;
mod types;

pub use error::StoreError;
pub use io::atomic_write;
pub use keys::Keyspace;
pub use kv::{load, load_all, save, FileStore, KeyValueStore, MemoryStore};
pub use paths::{Paths, HOME_ENV};
pub use types::{JournalEntry, MoodCheckIn};
