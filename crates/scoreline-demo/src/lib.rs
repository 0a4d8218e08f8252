#![forbid(unsafe_code)]

//! Terminal demo for scoreline panels.
//!
//! Builds a panel on the in-memory board from a layout file, drives title
//! rotation on a fixed tick, and draws the rendered lines with crossterm.

pub mod cli;
pub mod config;
pub mod driver;
pub mod render;
