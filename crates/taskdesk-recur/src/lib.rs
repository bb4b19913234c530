//! `taskdesk-recur` — pure recurrence-date engine.
//!
//! # Overview
//!
//! Given a reference date ("now"), a task's stored date (`YYYYMMDD`) and a
//! textual repeat rule, [`schedule::next_date`] computes the next date the
//! task should fire. The rule is parsed up front into a typed [`RepeatRule`]
//! and dispatched to a per-variant handler. Every call is a pure function of
//! its inputs: no I/O, no shared state, bounded deterministic time.
//!
//! # Rule grammar
//!
//! | Rule        | Behaviour                                                |
//! |-------------|----------------------------------------------------------|
//! | `d N`       | Every N days from the stored date                        |
//! | `w a,b,…`   | Next listed weekday (1=Sunday … 7=Saturday)              |
//! | `m D`       | Day D of the month, clamped when the month is shorter    |
//! | `y`         | Same month/day next year; Feb 29 waits for a leap year   |
//!
//! Anything else is rejected with [`RecurrenceError::InvalidRule`], as is
//! an empty rule on the next-date path.

pub mod error;
pub mod rule;
pub mod schedule;

pub use error::{RecurrenceError, Result};
pub use rule::RepeatRule;
pub use schedule::{next_date, next_occurrence, parse_date, DATE_FORMAT};
