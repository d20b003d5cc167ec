//! Command-line surface.
//!
//! Without a subcommand the binary opens the terminal UI. `show` and
//! `run` drive a fresh [`ContentSelector`] once and print the result,
//! which makes the panels scriptable and diffable.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::content::{HoareScenario, Tab};
use crate::error::{GuideError, GuideResult};
use crate::selector::ContentSelector;
use crate::tui::panels::{self, PanelOptions};

#[derive(Debug, Parser)]
#[command(
    name = "verifguide",
    version,
    about = "Guide pratique: exécution symbolique, concolique et logique de Hoare."
)]
pub struct Cli {
    /// Tab to open (introduction, symbolic, concolic, hoare, tools)
    #[arg(short, long)]
    pub tab: Option<Tab>,

    /// Extra config file, layered over the user and project files
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a panel as plain text, with its results filled in
    Show {
        /// Tab id
        tab: Tab,
    },
    /// Perform one action and print the populated result
    Run {
        #[command(subcommand)]
        action: RunAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum RunAction {
    /// Symbolic execution of compute(x, y)
    Symbolic {
        #[arg(long)]
        json: bool,
    },
    /// Concolic execution of compute(x, y)
    Concolic {
        #[arg(long)]
        json: bool,
    },
    /// Hoare-logic proof of a scenario (linear, conditional, loop)
    Hoare {
        scenario: String,
        #[arg(long)]
        json: bool,
    },
}

/// Render a whole panel, running its action(s) first.
pub fn show(tab: Tab) -> String {
    let mut selector = ContentSelector::with_tab(tab);
    let opts = PanelOptions::default();
    match tab {
        Tab::Symbolic => {
            selector.run_symbolic();
        }
        Tab::Concolic => {
            selector.run_concolic();
        }
        Tab::Hoare => {
            let mut lines = panels::panel_lines(&selector, tab, opts);
            for scenario in HoareScenario::ALL {
                let result = selector.verify_hoare_scenario(scenario);
                lines.push("".into());
                lines.push(format!("== {} ==", scenario.title()).into());
                lines.extend(panels::hoare_result_lines(result));
            }
            return panels::to_plain(&lines);
        }
        Tab::Introduction | Tab::Tools => {}
    }
    panels::to_plain(&panels::panel_lines(&selector, tab, opts))
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> GuideResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Perform `action` on a fresh selector and write the populated slot.
/// An unknown Hoare scenario writes nothing.
pub fn run(action: &RunAction, out: &mut impl Write) -> GuideResult<()> {
    let mut selector = ContentSelector::new();
    let lines = match action {
        RunAction::Symbolic { json } => {
            let result = selector.run_symbolic();
            if *json {
                return write_json(out, result);
            }
            panels::symbolic_result_lines(result)
        }
        RunAction::Concolic { json } => {
            let result = selector.run_concolic();
            if *json {
                return write_json(out, result);
            }
            panels::concolic_result_lines(result)
        }
        RunAction::Hoare { scenario, json } => {
            let Some(result) = selector.verify_hoare(scenario) else {
                return Ok(());
            };
            if *json {
                return write_json(out, result);
            }
            panels::hoare_result_lines(result)
        }
    };
    writeln!(out, "{}", panels::to_plain(&lines))?;
    Ok(())
}

/// Dispatch a non-interactive subcommand.
pub fn execute(command: &Command, out: &mut impl Write) -> GuideResult<()> {
    match command {
        Command::Show { tab } => {
            writeln!(out, "{}", show(*tab))?;
        }
        Command::Run { action } => run(action, out)?,
    }
    Ok(())
}

/// [`execute`] against a pipe: a reader that hung up early (`| head`)
/// ends the command cleanly.
pub fn execute_piped(command: &Command, out: &mut impl Write) -> GuideResult<()> {
    match execute(command, out) {
        Err(GuideError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(action: RunAction) -> String {
        let mut out = Vec::new();
        run(&action, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_tui_flags() {
        let cli = Cli::try_parse_from(["verifguide", "--tab", "intro", "--log-file", "/tmp/g.log"])
            .unwrap();
        assert_eq!(cli.tab, Some(Tab::Introduction));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/g.log")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_rejects_unknown_tab() {
        assert!(Cli::try_parse_from(["verifguide", "--tab", "settings"]).is_err());
        assert!(Cli::try_parse_from(["verifguide", "show", "settings"]).is_err());
    }

    #[test]
    fn parse_run_hoare() {
        let cli = Cli::try_parse_from(["verifguide", "run", "hoare", "loop", "--json"]).unwrap();
        match cli.command {
            Some(Command::Run {
                action: RunAction::Hoare { scenario, json },
            }) => {
                assert_eq!(scenario, "loop");
                assert!(json);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn show_symbolic_includes_paths() {
        let text = show(Tab::Symbolic);
        assert!(text.contains("int compute(int x, int y) {"));
        assert!(text.contains("Chemin 4:"));
        assert!(!text.contains("[Enter]"));
    }

    #[test]
    fn show_hoare_lists_all_scenarios() {
        let text = show(Tab::Hoare);
        for scenario in HoareScenario::ALL {
            assert!(text.contains(&format!("== {} ==", scenario.title())));
        }
        assert_eq!(text.matches("Preuve:").count(), 3);
        assert_eq!(text.matches("Invariant de boucle").count(), 1);
    }

    #[test]
    fn show_intro_and_tools() {
        assert!(show(Tab::Introduction).contains("1. Model Checking"));
        assert!(show(Tab::Tools).contains("Installation Recommandée"));
    }

    #[test]
    fn run_concolic_text() {
        let text = run_to_string(RunAction::Concolic { json: false });
        assert!(text.starts_with("Exécutions Successives:"));
        assert!(text.contains("Entrée concrète: x=-2, y=-5"));
    }

    #[test]
    fn run_symbolic_json() {
        let text = run_to_string(RunAction::Symbolic { json: true });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["paths"].as_array().unwrap().len(), 4);
        assert_eq!(value["paths"][0]["constraints"], serde_json::json!(["x > 0", "y > 0"]));
    }

    #[test]
    fn run_hoare_json_loop_invariant() {
        let text = run_to_string(RunAction::Hoare {
            scenario: "loop".into(),
            json: true,
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["invariant"], "{ sum = i(i-1)/2 && i ≤ n }");
    }

    #[test]
    fn run_unknown_scenario_prints_nothing() {
        let text = run_to_string(RunAction::Hoare {
            scenario: "unknown-key".into(),
            json: false,
        });
        assert!(text.is_empty());
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_ends_cleanly() {
        let show = Command::Show {
            tab: Tab::Introduction,
        };
        assert!(matches!(
            execute(&show, &mut ClosedPipe),
            Err(GuideError::Io(_))
        ));
        execute_piped(&show, &mut ClosedPipe).unwrap();

        let run_json = Command::Run {
            action: RunAction::Symbolic { json: true },
        };
        execute_piped(&run_json, &mut ClosedPipe).unwrap();
    }

    #[test]
    fn execute_dispatches_show() {
        let mut out = Vec::new();
        execute(&Command::Show { tab: Tab::Concolic }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Aucune (tous les chemins explorés)"));
    }
}
