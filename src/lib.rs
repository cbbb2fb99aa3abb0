//! # Connect Four
//!
//! Winner detection for Connect Four boards. A board is an immutable,
//! statically sized grid; the resolver scans it for four aligned pieces and
//! reports the owner.
//!
//! ## Modules
//!
//! - [`game`]: Board, cells, players, line scanners and the winner resolver
//! - [`render`]: Plain-text output of boards and results
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod render;
