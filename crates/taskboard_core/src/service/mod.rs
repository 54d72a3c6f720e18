//! Board use-case layer.
//!
//! # Responsibility
//! - Validate and build actions for callers (UI, CLI).
//! - Own the current snapshot and persist it after every change.

pub mod board_manager;
pub mod task_id;
