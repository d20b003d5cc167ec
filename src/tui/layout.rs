//! Tabbed layout.
//!
//! ```text
//!  Vérification Formelle: Guide Pratique
//!  Model Checking, Exécution Symbolique/Concolique, et Logique de Hoare
//!  File  View  Run  Help                               (menu bar)
//!  [1 Introduction] [2 Exécution Symbolique] ...       (tab bar)
//! ┌─ Exécution Symbolique ────────────────────────────┐
//! │  (content for the active tab)                      │
//! └────────────────────────────────────────────────────┘
//!  [symbolic] [S ✓ C · H linear]  1-5:Tabs  Enter:Run
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;
use tui_menu::Menu;

use super::app::TuiApp;
use super::panels::{self, PanelOptions};
use super::tools_tree;
use crate::content::catalog;
use crate::content::Tab;

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + subtitle
            Constraint::Length(1), // menu bar
            Constraint::Length(1), // tab bar
            Constraint::Min(5),    // content area
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_header(f, outer[0]);
    draw_tab_bar(f, app, outer[2]);

    match app.active_tab() {
        Tab::Tools => draw_tools(f, app, outer[3]),
        _ => draw_content(f, app, outer[3]),
    }

    draw_status(f, app, outer[4]);

    if app.show_help {
        draw_help(f, outer[3]);
    }

    // Fill the menu bar row with white background before rendering menu items.
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(Color::White)),
        outer[1],
    );

    // Menu bar rendered last so dropdowns overlay tab bar + content below.
    let menu_area = Rect {
        x: outer[1].x,
        y: outer[1].y,
        width: outer[1].width,
        height: outer[1].height + outer[2].height + outer[3].height,
    };
    let menu_widget = Menu::new()
        .default_style(Style::default().fg(Color::Black).bg(Color::White))
        .highlight(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .dropdown_width(28)
        .dropdown_style(Style::default().fg(Color::Black).bg(Color::White));
    f.render_stateful_widget(menu_widget, menu_area, &mut app.menu_state);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", catalog::TITLE),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", catalog::SUBTITLE),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_tab_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let active = app.active_tab();
    let spans: Vec<Span> = Tab::ALL
        .iter()
        .flat_map(|&tab| {
            let style = if tab == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::raw(" "),
                Span::styled(format!("[{} {}]", tab.index() + 1, tab.label()), style),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_block(tab: Tab) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", tab.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(panels::accent(tab)))
}

/// Scrollable paragraph for every tab except Tools.
fn draw_content(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let tab = app.active_tab();
    let opts = PanelOptions {
        hoare_cursor: Some(app.hoare_cursor),
        show_controls: true,
    };
    let lines = panels::panel_lines(&app.selector, tab, opts);

    // Clamp scroll so we never scroll past content.
    let inner_height = area.height.saturating_sub(2) as u32;
    let inner_width = area.width.saturating_sub(2).max(1);
    // Count rows with ratatui's own word wrapper, before the block is attached.
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total_lines = para.line_count(inner_width).min(u32::MAX as usize) as u32;
    let max_scroll = total_lines.saturating_sub(inner_height).min(u16::MAX as u32) as u16;
    let scroll = app.scroll.min(max_scroll);
    // Write clamped value back so up/down keys work immediately
    app.scroll = scroll;
    app.viewport_height = inner_height.min(u16::MAX as u32) as u16;

    let para = para.block(panel_block(tab)).scroll((scroll, 0));
    f.render_widget(para, area);

    if total_lines > inner_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}

/// Tools tab: foldable tree on top, install script below.
fn draw_tools(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let install = panels::install_lines();
    let install_rows = (install.len() as u16 + 2).min(area.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(install_rows)])
        .split(area);

    let items = tools_tree::build_tools_tree();
    let block = panel_block(Tab::Tools);
    match tui_tree_widget::Tree::new(&items) {
        Ok(tree) => {
            let tree = tree
                .block(block)
                .highlight_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol(">> ");
            f.render_stateful_widget(tree, chunks[0], &mut app.tools_tree_state);
        }
        Err(_) => {
            // Fall back to the flat listing
            let para = Paragraph::new(panels::tools_lines()).block(block);
            f.render_widget(para, chunks[0]);
        }
    }

    let install_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(install).block(install_block), chunks[1]);
}

/// Centered shortcuts overlay.
fn draw_help(f: &mut Frame, area: Rect) {
    let shortcuts = [
        ("1-5", "Choisir un onglet"),
        ("Tab / Shift-Tab", "Onglet suivant / précédent"),
        ("Enter / r", "Exécuter / vérifier / déplier"),
        ("\u{2191} \u{2193}", "Scénario, arbre ou défilement"),
        ("j k PgUp PgDn Home", "Défilement"),
        ("F10", "Menu"),
        ("q Esc ^C", "Quitter"),
    ];
    let lines: Vec<Line> = shortcuts
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {keys:<20}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*what),
            ])
        })
        .collect();

    let width = 56u16.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let block = Block::default()
        .title(" Raccourcis ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let sel = &app.selector;
    let mark = |filled: bool| if filled { "\u{2713}" } else { "\u{00b7}" };
    let hoare = sel
        .hoare_result()
        .map(|_| app.hoare_cursor.id())
        .unwrap_or("\u{00b7}");

    let spans = vec![
        Span::styled(
            format!(" [{}]", app.active_tab().id()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "[S {}  C {}  H {}]",
                mark(sel.symbolic_result().is_some()),
                mark(sel.concolic_result().is_some()),
                hoare,
            ),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            "1-5:Tabs  Enter:Run  \u{2191}\u{2193}:Move  F10:Menu  ?:Help  q:Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HoareScenario;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut TuiApp) -> String {
        render_sized(app, 100, 60)
    }

    fn render_sized(app: &mut TuiApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn header_and_tab_bar() {
        let mut app = TuiApp::new();
        let screen = render(&mut app);
        assert!(screen.contains("Guide Pratique"));
        assert!(screen.contains("[1 Introduction]"));
        assert!(screen.contains("[5 Outils]"));
        assert!(screen.contains("[introduction]"));
    }

    #[test]
    fn symbolic_paths_appear_after_run() {
        let mut app = TuiApp::with_tab(Tab::Symbolic);
        assert!(!render(&mut app).contains("Chemin 1"));
        app.activate();
        let screen = render(&mut app);
        assert!(screen.contains("Chemin 1"));
        assert!(screen.contains("[S \u{2713}"));
    }

    #[test]
    fn hoare_result_visible_after_verify() {
        let mut app = TuiApp::with_tab(Tab::Hoare);
        app.hoare_cursor = HoareScenario::Loop;
        app.activate();
        let screen = render(&mut app);
        assert!(screen.contains("Invariant de boucle"));
        assert!(screen.contains("H loop"));
    }

    #[test]
    fn tools_tab_renders_tree() {
        let mut app = TuiApp::with_tab(Tab::Tools);
        let screen = render(&mut app);
        assert!(screen.contains("Model Checkers (3)"));
        assert!(screen.contains("docker pull klee/klee"));
    }

    #[test]
    fn scroll_clamped_to_content() {
        let mut app = TuiApp::new();
        app.scroll = 500;
        render(&mut app);
        assert!(app.scroll < 500);
        assert!(app.viewport_height > 0);
    }

    #[test]
    fn help_overlay_drawn() {
        let mut app = TuiApp::new();
        app.show_help = true;
        assert!(render(&mut app).contains("Raccourcis"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = TuiApp::with_tab(Tab::Tools);
        app.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[test]
    fn narrow_terminal_scrolls_to_last_line() {
        for width in [20, 24, 28, 32, 40] {
            let mut app = TuiApp::with_tab(Tab::Concolic);
            app.activate();
            app.scroll = u16::MAX;
            let screen = render_sized(&mut app, width, 30);
            assert!(
                screen.contains("programmes."),
                "last line unreachable at width {width}"
            );
        }
    }
}
