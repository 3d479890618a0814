//! Checklist engine: line grammar, age policy and the three rewrite passes
//!
//! Every pass takes a full text snapshot and returns a full replacement.
//! Passes never fail and never read a clock; "today" is always an argument.

pub mod clean;
pub mod grammar;
pub mod insert;
pub mod lines;
pub mod policy;
pub mod reorder;

pub use clean::{clean, CleanOutcome};
pub use grammar::{classify, completion_date, format_unchecked, LineKind};
pub use insert::{insert, insert_with_header, InsertPosition};
pub use policy::{cutoff, is_expired, AgePolicy};
pub use reorder::reorder;
