//! Persistence for card records.
//!
//! Three layers, from the inside out:
//!
//! - [`adapter`] - the JSON codec between [`CardRecord`] and its
//!   transportable text form, with the import-path validation gate.
//! - [`kv`] - the key-value storage collaborators (filesystem-backed and
//!   in-memory). The browser original used `localStorage` here.
//! - [`store`] - the card store: save/load/clear of the one record a
//!   session owns, under the fixed storage key.
//!
//! [`CardRecord`]: qeo_core::model::CardRecord

pub mod adapter;
pub mod error;
pub mod kv;
pub mod store;

pub use adapter::{LoadSource, deserialize, serialize, serialize_pretty};
pub use error::{ParseError, StoreError, StoreResult};
pub use kv::{FsStore, KeyValueStore, MemoryStore};
pub use store::CardStore;
