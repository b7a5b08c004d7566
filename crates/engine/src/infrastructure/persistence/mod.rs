//! Progress storage adapters
//!
//! Both adapters store the serialized progression record as opaque text under
//! a namespace key.

mod memory_store;
mod sqlite_store;

pub use memory_store::InMemoryProgressStore;
pub use sqlite_store::SqliteProgressStore;
