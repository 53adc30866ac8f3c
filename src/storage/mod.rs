//! Durable local state
//!
//! Key-value backends, the typed per-date progress records stored in them, and the
//! development-date override that shares the same store.

mod calendar;
mod kv;
mod progress;

pub use calendar::Calendar;
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use progress::{CompletionRecord, Outcome, ProgressRecord, ProgressStore};
