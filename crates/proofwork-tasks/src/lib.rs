//! # proofwork-tasks
//!
//! Filtering of an already-fetched open task list, plus the relative-time
//! labels shown next to tasks and activity.

pub mod budget;
pub mod filter;
pub mod relative_time;

pub use budget::BudgetRange;
pub use filter::TaskFilter;
pub use relative_time::{posted_label, relative_time};
