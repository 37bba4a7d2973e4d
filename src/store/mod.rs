//! Persistence of final scores to SQLite.

mod scores;

pub use scores::{ScoreStore, StoreConfig, StoredScore};
