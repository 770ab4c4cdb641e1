//! Persisted boss roster
//!
//! `BossStore` keeps the roster in memory and writes a whole-list JSON
//! snapshot to a `StateStorage` slot after every mutation. On startup the
//! snapshot is read back; a missing or unreadable snapshot falls back to the
//! seed roster instead of failing.

mod boss_store;
mod error;
mod storage;


pub use boss_store::BossStore;
pub use error::StoreError;
pub use storage::{MemoryStorage, StateStorage};
