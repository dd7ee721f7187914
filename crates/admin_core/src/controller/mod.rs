//! Controller layer: user-action commands and the reducer that applies them.

pub mod events;
pub mod reducer;

pub use events::{Command, IgnoreReason, Transition};
