//! Panel content as styled lines.
//!
//! One builder per tab. The terminal view wraps these in a `Paragraph`;
//! the `show` / `run` subcommands flatten them with [`to_plain`]. Builders
//! only read the selector, they never mutate it.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::catalog::{
    self, ConcolicRunResult, HoareResult, SymbolicRunResult, TOOL_CATEGORIES,
};
use crate::content::{HoareScenario, Tab};
use crate::selector::ContentSelector;

/// Per-view knobs that do not live in the selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelOptions {
    /// Highlighted scenario on the Hoare tab.
    pub hoare_cursor: Option<HoareScenario>,
    /// Render key hints for the run actions.
    pub show_controls: bool,
}

/// Accent color per technique, as on the original page.
pub fn accent(tab: Tab) -> Color {
    match tab {
        Tab::Introduction => Color::Blue,
        Tab::Symbolic => Color::Magenta,
        Tab::Concolic => Color::Green,
        Tab::Hoare => Color::LightBlue,
        Tab::Tools => Color::Yellow,
    }
}

fn heading(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

fn code_block(code: &str) -> impl Iterator<Item = Line<'static>> + '_ {
    code.lines().map(|l| {
        Line::from(Span::styled(
            format!("  {l}"),
            Style::default().fg(Color::Gray),
        ))
    })
}

fn run_hint(label: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("\u{25b6} {label}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Lines for the given tab, filled from the selector's result slots.
pub fn panel_lines(selector: &ContentSelector, tab: Tab, opts: PanelOptions) -> Vec<Line<'static>> {
    match tab {
        Tab::Introduction => intro_lines(),
        Tab::Symbolic => symbolic_lines(selector.symbolic_result(), opts),
        Tab::Concolic => concolic_lines(selector.concolic_result(), opts),
        Tab::Hoare => hoare_lines(selector.hoare_result(), opts),
        Tab::Tools => tools_lines(),
    }
}

pub fn intro_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("1. Model Checking", Color::White),
        Line::from(""),
        field("Définition", catalog::MODEL_CHECKING_DEFINITION),
        Line::from(catalog::MODEL_CHECKING_EXPLORATION),
        Line::from(""),
    ];
    lines.extend(code_block(catalog::MODEL_CHECKING_PROPERTY));
    lines.extend(code_block(catalog::MODEL_CHECKING_PROPERTY_GLOSS));
    lines.push(Line::from(""));
    lines.push(heading("2. Différences Clés", Color::White));

    for (title, traits, color) in [
        ("Exécution Symbolique", &catalog::SYMBOLIC_TRAITS, accent(Tab::Symbolic)),
        ("Exécution Concolique", &catalog::CONCOLIC_TRAITS, accent(Tab::Concolic)),
    ] {
        lines.push(Line::from(""));
        lines.push(heading(title, color));
        for t in traits {
            lines.push(Line::from(format!("  \u{2022} {t}")));
        }
    }
    lines
}

pub fn symbolic_lines(result: Option<&SymbolicRunResult>, opts: PanelOptions) -> Vec<Line<'static>> {
    let color = accent(Tab::Symbolic);
    let mut lines = vec![heading("Programme d'exemple:", Color::White)];
    lines.extend(code_block(catalog::SYMBOLIC_PROGRAM));
    lines.push(Line::from(""));
    if opts.show_controls {
        lines.push(run_hint("Exécuter Symboliquement", color));
        lines.push(Line::from(""));
    }

    if let Some(result) = result {
        lines.extend(symbolic_result_lines(result));
    }
    lines
}

/// The populated part of the Symbolic panel.
pub fn symbolic_result_lines(result: &SymbolicRunResult) -> Vec<Line<'static>> {
    let color = accent(Tab::Symbolic);
    let mut lines = vec![heading("Arbres d'Exécution Symbolique:", Color::White)];
    for (idx, path) in result.paths.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(heading(&format!("Chemin {}:", idx + 1), color));
        lines.push(field("  Condition", path.condition));
        lines.push(field("  Résultat", path.result));
        lines.push(field("  Contraintes", path.constraints.join(", ")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("\u{2713} ", Style::default().fg(Color::Green)),
        Span::styled(
            "Tous les chemins explorés: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{} chemins possibles", result.paths.len())),
    ]));
    lines
}

pub fn concolic_lines(result: Option<&ConcolicRunResult>, opts: PanelOptions) -> Vec<Line<'static>> {
    let color = accent(Tab::Concolic);
    let mut lines = vec![
        heading("Même programme:", Color::White),
        Line::from(Span::styled(
            catalog::CONCOLIC_INTRO,
            Style::default().fg(Color::Gray),
        )),
    ];
    lines.extend(code_block(catalog::CONCOLIC_PROGRAM));
    lines.push(Line::from(""));
    if opts.show_controls {
        lines.push(run_hint("Exécuter en Mode Concolique", color));
        lines.push(Line::from(""));
    }

    if let Some(result) = result {
        lines.extend(concolic_result_lines(result));
    }
    lines
}

/// The populated part of the Concolic panel.
pub fn concolic_result_lines(result: &ConcolicRunResult) -> Vec<Line<'static>> {
    let color = accent(Tab::Concolic);
    let mut lines = vec![heading("Exécutions Successives:", Color::White)];
    for (idx, exec) in result.executions.iter().enumerate() {
        let new_constraints = if exec.new_constraints.is_empty() {
            catalog::NO_NEW_CONSTRAINTS.to_string()
        } else {
            exec.new_constraints.join(", ")
        };
        lines.push(Line::from(""));
        lines.push(heading(&format!("Exécution {}:", idx + 1), color));
        lines.push(field("  Entrée concrète", exec.input));
        lines.push(field("  Chemin pris", exec.path));
        lines.push(field("  Sortie", exec.output.to_string()));
        lines.push(field("  Nouvelles contraintes générées", new_constraints));
    }
    lines.push(Line::from(""));
    lines.push(field("Avantage", catalog::CONCOLIC_ADVANTAGE));
    lines
}

pub fn hoare_lines(result: Option<&HoareResult>, opts: PanelOptions) -> Vec<Line<'static>> {
    let color = accent(Tab::Hoare);
    let mut lines = vec![
        heading("Triple de Hoare:", Color::White),
        Line::from(""),
        Line::from(Span::styled(
            format!("    {}", catalog::HOARE_TRIPLE),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(catalog::HOARE_TRIPLE_GLOSS),
        Line::from(""),
    ];

    for scenario in HoareScenario::ALL {
        let selected = opts.hoare_cursor == Some(scenario);
        let (marker, style) = if selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(scenario.title(), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", scenario.subtitle()),
            Style::default().fg(Color::Gray),
        )));
    }
    if opts.show_controls {
        lines.push(Line::from(Span::styled(
            "\u{2191}\u{2193} choisir, Enter vérifier",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(result) = result {
        lines.push(Line::from(""));
        lines.extend(hoare_result_lines(result));
    }
    lines
}

/// The populated part of the Hoare panel: code, specification, proof.
pub fn hoare_result_lines(result: &HoareResult) -> Vec<Line<'static>> {
    let color = accent(Tab::Hoare);
    let mut lines = vec![heading("Code du Programme:", Color::White)];
    lines.extend(code_block(result.code));
    lines.push(Line::from(""));
    lines.push(heading("Spécification:", color));
    lines.push(field("  Précondition", result.precondition));
    lines.push(field("  Postcondition", result.postcondition));
    if let Some(invariant) = result.invariant {
        lines.push(field("  Invariant de boucle", invariant));
    }
    lines.push(Line::from(""));
    lines.push(heading("Preuve:", Color::Green));
    for line in result.proof {
        let style = if line.contains('\u{2713}') {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("  {line}"), style)));
    }
    lines
}

pub fn tools_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in &TOOL_CATEGORIES {
        lines.push(heading(category.title, accent(Tab::Tools)));
        for tool in category.tools {
            lines.push(Line::from(Span::styled(
                format!("  {}", tool.name),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", tool.description),
                Style::default().fg(Color::Gray),
            )));
            if let Some(cmd) = tool.command {
                lines.push(Line::from(Span::styled(
                    format!("    $ {cmd}"),
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        lines.push(Line::from(""));
    }
    lines.extend(install_lines());
    lines
}

/// The "Installation Recommandée" box.
pub fn install_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading(catalog::INSTALL_TITLE, Color::Yellow)];
    lines.extend(catalog::INSTALL_SCRIPT.lines().map(|l| {
        Line::from(Span::styled(
            format!("  {l}"),
            Style::default().fg(Color::LightGreen),
        ))
    }));
    lines
}

/// Flatten styled lines to plain text, one line per `Line`.
pub fn to_plain(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(selector: &ContentSelector, tab: Tab) -> String {
        to_plain(&panel_lines(selector, tab, PanelOptions::default()))
    }

    #[test]
    fn symbolic_hidden_until_run() {
        let mut sel = ContentSelector::new();
        let before = plain(&sel, Tab::Symbolic);
        assert!(before.contains("int compute(int x, int y)"));
        assert!(!before.contains("Chemin 1"));

        sel.run_symbolic();
        let after = plain(&sel, Tab::Symbolic);
        assert!(after.contains("Chemin 4:"));
        assert!(after.contains("Contraintes: x ≤ 0, y ≤ 0"));
        assert!(after.contains("Tous les chemins explorés: 4 chemins possibles"));
    }

    #[test]
    fn concolic_empty_constraints_message() {
        let mut sel = ContentSelector::new();
        sel.run_concolic();
        let text = plain(&sel, Tab::Concolic);
        assert!(text.contains("Sortie: 8"));
        assert!(text.contains("Nouvelles contraintes générées: Aucune (tous les chemins explorés)"));
        assert!(text.contains("Avantage: "));
    }

    #[test]
    fn hoare_invariant_only_for_loop() {
        let mut sel = ContentSelector::new();
        sel.verify_hoare("linear");
        assert!(!plain(&sel, Tab::Hoare).contains("Invariant de boucle"));

        sel.verify_hoare("loop");
        let text = plain(&sel, Tab::Hoare);
        assert!(text.contains("Invariant de boucle: { sum = i(i-1)/2 && i ≤ n }"));
        assert!(text.contains("✓ Invariant prouvé, postcondition valide"));
    }

    #[test]
    fn hoare_absent_result_renders_choices_only() {
        let mut sel = ContentSelector::new();
        sel.verify_hoare("unknown-key");
        let text = plain(&sel, Tab::Hoare);
        assert!(text.contains("3. Programme avec Boucle"));
        assert!(!text.contains("Preuve:"));
    }

    #[test]
    fn hoare_cursor_marks_choice() {
        let sel = ContentSelector::new();
        let opts = PanelOptions {
            hoare_cursor: Some(HoareScenario::Conditional),
            show_controls: true,
        };
        let text = to_plain(&panel_lines(&sel, Tab::Hoare, opts));
        assert!(text.contains("> 2. Programme avec Condition"));
        assert!(text.contains("  1. Programme Linéaire (séquence)"));
    }

    #[test]
    fn proof_check_lines_highlighted() {
        let lines = hoare_lines(
            Some(catalog::hoare_result(HoareScenario::Linear)),
            PanelOptions::default(),
        );
        let last = lines.last().unwrap();
        assert_eq!(last.spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn controls_only_when_requested() {
        let sel = ContentSelector::new();
        assert!(!plain(&sel, Tab::Symbolic).contains("[Enter]"));
        let opts = PanelOptions {
            show_controls: true,
            ..Default::default()
        };
        let text = to_plain(&panel_lines(&sel, Tab::Symbolic, opts));
        assert!(text.contains("[Enter] ▶ Exécuter Symboliquement"));
    }

    #[test]
    fn tools_lists_every_tool() {
        let text = plain(&ContentSelector::new(), Tab::Tools);
        for category in &TOOL_CATEGORIES {
            assert!(text.contains(category.title));
            for tool in category.tools {
                assert!(text.contains(tool.name));
            }
        }
        assert!(text.contains("$ frama-c -wp program.c"));
        assert!(text.contains("docker pull klee/klee"));
    }

    #[test]
    fn intro_has_property_and_bullets() {
        let text = plain(&ContentSelector::new(), Tab::Introduction);
        assert!(text.contains("□(request → ◇grant)"));
        assert!(text.contains("• Problème: explosion des chemins"));
        assert!(text.contains("• Plus scalable, explore progressivement"));
    }
}
