//! Session-scoped task tracking: add tasks, complete or remove them, and
//! follow progress in a terminal UI or a line-oriented shell.
//!
//! All state lives in a [`store::TaskStore`] owned by the running session and
//! is discarded when the session ends.

pub mod about;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod progress;
pub mod shell;
pub mod store;
pub mod tui;
