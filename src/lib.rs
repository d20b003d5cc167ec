//! verifguide: a terminal guide to program verification.
//!
//! Shows pre-canned walkthroughs of symbolic execution, concolic
//! execution and Hoare-logic proofs, plus a list of real tools. Nothing
//! is executed or solved: every "run" is a lookup into constant tables
//! held by the [`selector::ContentSelector`].

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod selector;
pub mod tui;
