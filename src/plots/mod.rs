//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod tick;

pub use tick::{Tick, TickChart};
