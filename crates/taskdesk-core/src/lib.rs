//! `taskdesk-core` — shared configuration and error types.

pub mod config;
pub mod error;

pub use config::TaskdeskConfig;
pub use error::{Result, TaskdeskError};
