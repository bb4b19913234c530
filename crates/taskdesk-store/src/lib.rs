//! `taskdesk-store` — SQLite persistence for task records.
//!
//! Tasks live in a single `scheduler` table. [`TaskStore`] wraps one
//! `rusqlite::Connection` behind a mutex so HTTP handlers can share it
//! across threads; all date fields are stored as `YYYYMMDD` text and the
//! repeat rule as its raw expression, parsed only by `taskdesk-recur`.

pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use store::TaskStore;
pub use types::Task;
