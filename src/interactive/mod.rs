//! Interactive TUI interface
//!
//! The presentation and input layer: draws the session and turns key presses
//! and mouse clicks into session transitions.

mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
