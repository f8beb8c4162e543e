//! img2wav CLI library.
//!
//! This crate provides the command implementations behind the `img2wav`
//! binary; `main.rs` only parses arguments and dispatches here.

pub mod commands;
