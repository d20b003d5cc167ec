//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::TuiApp;
use crate::content::Tab;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Global bindings
    if let KeyCode::Char('c') = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            app.should_quit = true;
            return;
        }
    }

    if app.menu_active {
        handle_menu_key(app, key);
        return;
    }

    if app.show_help {
        // Any key dismisses the overlay
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::F(10) => app.open_menu(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(idx) {
                app.select_tab(tab);
            }
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Enter | KeyCode::Char('r') => app.activate(),
        _ => handle_pane_key(app, key),
    }
}

/// Bindings whose meaning depends on the active tab.
fn handle_pane_key(app: &mut TuiApp, key: KeyEvent) {
    match (app.active_tab(), key.code) {
        (Tab::Tools, KeyCode::Up) => {
            app.tools_tree_state.key_up();
        }
        (Tab::Tools, KeyCode::Down) => {
            app.tools_tree_state.key_down();
        }
        (Tab::Tools, KeyCode::Left) => {
            app.tools_tree_state.key_left();
        }
        (Tab::Tools, KeyCode::Right) => {
            app.tools_tree_state.key_right();
        }
        (Tab::Hoare, KeyCode::Up) => app.hoare_cursor_up(),
        (Tab::Hoare, KeyCode::Down) => app.hoare_cursor_down(),
        (_, KeyCode::Left) => app.prev_tab(),
        (_, KeyCode::Right) => app.next_tab(),
        (_, KeyCode::Up | KeyCode::Char('k')) => app.scroll_up(),
        (_, KeyCode::Down | KeyCode::Char('j')) => app.scroll_down(),
        (_, KeyCode::PageUp) => app.page_up(),
        (_, KeyCode::PageDown) => app.page_down(),
        (_, KeyCode::Home) => app.scroll_home(),
        _ => {}
    }
}

/// Menu bar has focus: arrows navigate, Enter selects, Esc/F10 close.
fn handle_menu_key(app: &mut TuiApp, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            app.menu_state.left();
        }
        KeyCode::Right => {
            app.menu_state.right();
        }
        KeyCode::Up => {
            app.menu_state.up();
        }
        KeyCode::Down => {
            app.menu_state.down();
        }
        KeyCode::Enter => {
            app.menu_state.select();
            app.drain_menu_events();
        }
        KeyCode::Esc | KeyCode::F(10) => app.close_menu(),
        _ => {}
    }
}
