//! TuiApp: the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets. The guide's own state
//! (active tab, result slots) is the embedded [`ContentSelector`]; the
//! rest is view-only (scroll, cursors, menu, overlay).

use tracing::debug;
use tui_menu::{MenuEvent, MenuItem, MenuState};
use tui_tree_widget::TreeState;

use crate::content::{HoareScenario, Tab};
use crate::selector::ContentSelector;

use super::event::TuiMessage;
use super::tools_tree;

/// Actions reachable from the menu bar and from key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SwitchTab(Tab),
    RunSymbolic,
    RunConcolic,
    VerifyHoare(HoareScenario),
    ToggleHelp,
    Quit,
}

/// Build the menu item tree for the menu bar.
pub fn build_menu_items() -> Vec<MenuItem<MenuAction>> {
    let view_items = Tab::ALL
        .iter()
        .map(|&tab| {
            MenuItem::item(
                format!("{}  {}", tab.label(), tab.index() + 1),
                MenuAction::SwitchTab(tab),
            )
        })
        .collect();

    let mut run_items = vec![
        MenuItem::item("Symbolique", MenuAction::RunSymbolic),
        MenuItem::item("Concolique", MenuAction::RunConcolic),
    ];
    run_items.extend(HoareScenario::ALL.iter().map(|&s| {
        MenuItem::item(format!("Hoare: {}", s.id()), MenuAction::VerifyHoare(s))
    }));

    vec![
        MenuItem::group("File", vec![MenuItem::item("Quit  q", MenuAction::Quit)]),
        MenuItem::group("View", view_items),
        MenuItem::group("Run", run_items),
        MenuItem::group(
            "Help",
            vec![MenuItem::item("Shortcuts  ?", MenuAction::ToggleHelp)],
        ),
    ]
}

/// The main TUI application state (TEA model).
pub struct TuiApp {
    /// Active tab and result slots.
    pub selector: ContentSelector,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Highlighted scenario on the Hoare tab.
    pub hoare_cursor: HoareScenario,
    /// Vertical scroll of the content pane. Reset on tab switch.
    pub scroll: u16,
    /// Viewport height of the content pane (set by renderer, used by PageUp/PageDown).
    pub viewport_height: u16,
    /// Tree widget state for the Tools tab.
    pub tools_tree_state: TreeState<String>,
    /// Menu bar state (tui-menu).
    pub menu_state: MenuState<MenuAction>,
    /// Whether the menu bar has keyboard focus (dropdowns visible).
    pub menu_active: bool,
    /// Shortcuts overlay visible.
    pub show_help: bool,
}

impl TuiApp {
    /// Create a new TuiApp on the Introduction tab.
    pub fn new() -> Self {
        Self::with_tab(Tab::default())
    }

    /// Create a new TuiApp starting on `tab`.
    pub fn with_tab(tab: Tab) -> Self {
        let mut tools_tree_state = TreeState::default();
        for id in tools_tree::category_ids() {
            tools_tree_state.open(vec![id]);
        }
        Self {
            selector: ContentSelector::with_tab(tab),
            should_quit: false,
            hoare_cursor: HoareScenario::Linear,
            scroll: 0,
            viewport_height: 20, // sensible default, updated by renderer
            tools_tree_state,
            menu_state: MenuState::new(build_menu_items()),
            menu_active: false,
            show_help: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.selector.active_tab()
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            TuiMessage::Action(action) => {
                self.apply(action);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Perform an action against the selector / view state.
    pub fn apply(&mut self, action: MenuAction) {
        debug!(?action, "apply");
        match action {
            MenuAction::SwitchTab(tab) => self.select_tab(tab),
            MenuAction::RunSymbolic => {
                self.selector.run_symbolic();
            }
            MenuAction::RunConcolic => {
                self.selector.run_concolic();
            }
            MenuAction::VerifyHoare(scenario) => {
                self.hoare_cursor = scenario;
                self.selector.verify_hoare(scenario.id());
            }
            MenuAction::ToggleHelp => self.show_help = !self.show_help,
            MenuAction::Quit => self.should_quit = true,
        }
    }

    /// Switch tab and reset scroll. Result slots persist.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.selector.active_tab() {
            self.scroll = 0;
        }
        self.selector.select_tab(tab);
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab().prev());
    }

    /// Enter on the current tab: run its action, if it has one.
    pub fn activate(&mut self) {
        match self.active_tab() {
            Tab::Introduction => {}
            Tab::Symbolic => self.apply(MenuAction::RunSymbolic),
            Tab::Concolic => self.apply(MenuAction::RunConcolic),
            Tab::Hoare => self.apply(MenuAction::VerifyHoare(self.hoare_cursor)),
            Tab::Tools => {
                self.tools_tree_state.toggle_selected();
            }
        }
    }

    /// Move the Hoare scenario cursor up (clamped).
    pub fn hoare_cursor_up(&mut self) {
        let idx = self.hoare_cursor_index();
        if idx > 0 {
            self.hoare_cursor = HoareScenario::ALL[idx - 1];
        }
    }

    /// Move the Hoare scenario cursor down (clamped).
    pub fn hoare_cursor_down(&mut self) {
        let idx = self.hoare_cursor_index();
        if idx + 1 < HoareScenario::ALL.len() {
            self.hoare_cursor = HoareScenario::ALL[idx + 1];
        }
    }

    fn hoare_cursor_index(&self) -> usize {
        HoareScenario::ALL
            .iter()
            .position(|&s| s == self.hoare_cursor)
            .unwrap_or(0)
    }

    /// Scroll content pane down. Clamped to content by the renderer.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll content pane up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.viewport_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.viewport_height.max(1));
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    /// Give the menu bar keyboard focus.
    pub fn open_menu(&mut self) {
        self.menu_active = true;
        self.menu_state.activate();
    }

    /// Drop menu focus and collapse dropdowns.
    pub fn close_menu(&mut self) {
        self.menu_active = false;
        self.menu_state.reset();
    }

    /// Apply any items selected in the menu since the last call.
    pub fn drain_menu_events(&mut self) {
        let selected: Vec<MenuAction> = self
            .menu_state
            .drain_events()
            .map(|e| match e {
                MenuEvent::Selected(action) => action,
            })
            .collect();
        if selected.is_empty() {
            return;
        }
        self.close_menu();
        for action in selected {
            self.apply(action);
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
