//! Notice decision, rendering and display actions.
//!
//! # Responsibility
//! - Decide visibility (`should_render`), produce markup (`render`), and
//!   orchestrate both for a batch of notices (`display`, `enqueue`).
//! - Stay free of global request state; host data arrives via `AdminContext`.

pub mod display;
pub mod enqueue;
pub mod render;
pub mod should_render;
