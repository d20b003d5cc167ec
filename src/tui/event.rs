//! TUI event plumbing: everything the update loop reacts to.
//!
//! A blocking reader task forwards crossterm key events; the runner
//! multiplexes them with a render interval. All events flow through a
//! single mpsc channel as TuiMessages.

use crossterm::event::KeyEvent;

use super::app::MenuAction;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// A resolved action (menu selection or scripted input).
    Action(MenuAction),
    /// Quit the TUI.
    Quit,
}
