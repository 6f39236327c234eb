//! RetroOS console core.
//!
//! Everything between the keyboard interrupt and the text display that does
//! not touch hardware directly: scancode decoding, line editing, command
//! dispatch and the text console with its protected prompt.
//!
//! # Architecture
//!
//! - `decoder`/`keymap`: scancode set 1 → ASCII, with shift and caps lock
//! - `editor`/`command`: the command line and the fixed command table
//! - `buffer`: cursor, colors, scroll region and the input anchor
//! - `context`: the single owned state the interrupt handler threads through
//!
//! Hardware is reached only through the `retro-hal` traits, so the whole crate
//! runs on the host under `cargo test`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod context;
pub mod decoder;
pub mod editor;
pub mod keymap;

#[cfg(test)]
mod testutil;

pub use buffer::{ConsoleBuffer, Position, ScreenChar, ScrollRegion};
pub use color::{Color, ColorCode};
pub use command::Command;
pub use config::ConsoleConfig;
pub use context::ConsoleContext;
pub use decoder::{Modifiers, ScancodeDecoder};
pub use editor::{CommandLine, LineEditor};

/// Number of columns in VGA text mode.
pub const WIDTH: usize = 80;

/// Number of rows in VGA text mode.
pub const HEIGHT: usize = 25;
