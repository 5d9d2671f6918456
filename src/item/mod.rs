//! Item module - Per-item orchestration around diff and group.
//!
//! Each item is independent: its inputs are resolved, compared and grouped,
//! and the changeset is merged into a copy of the item. Failures are
//! handled according to the run's [`FailurePolicy`].

mod input;
mod item;
mod runner;

pub use input::*;
pub use item::*;
pub use runner::*;
