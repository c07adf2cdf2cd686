//! ClipKeep: clipboard history keeper.
//!
//! The binary is a thin shell over [`bootstrap`] (wiring and lifecycle)
//! and [`cli`] (argument parsing and command execution).

pub mod bootstrap;
pub mod cli;
