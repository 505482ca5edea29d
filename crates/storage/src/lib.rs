//! `menucart-storage`
//!
//! **Responsibility:** durable cart state across sessions.
//!
//! This crate provides:
//! - a string key-value store abstraction ([`KvStore`]) mirroring a
//!   browser-local storage facility
//! - a synchronous file-backed implementation under the OS app data
//!   directory, plus an in-memory one for tests
//! - the [`PersistentCartStore`] adapter that serializes the cart under a
//!   fixed key and degrades gracefully on every failure
//!
//! Nothing here is async: storage access is local and runs to completion
//! inside the mutating event handler.

pub mod cart_store;
pub mod file;
pub mod kv;

pub use cart_store::{PersistentCartStore, CART_STORAGE_KEY};
pub use file::FileKvStore;
pub use kv::{KvStore, MemoryKvStore, StoreError};
