//! [`IKeyValueStore`](strata_core::traits::IKeyValueStore) backends.

mod file;
mod memory;
mod sqlite;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
