//! Terminal presentation layer: ratatui TUI.
//!
//! Renders the guide's five panels and routes key presses to the
//! [`ContentSelector`](crate::selector::ContentSelector) operations.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (render).
//! Immediate mode: panels are rebuilt from the selector on every frame,
//! the only retained widget state is the tools tree and the menu bar.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod panels;
pub mod runner;
pub mod tools_tree;
