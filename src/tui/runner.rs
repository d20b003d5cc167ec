//! TUI runner: main loop that wires everything together.
//!
//! Creates terminal, spawns the input reader, runs main TEA loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use crate::config::GuideConfig;

use super::app::TuiApp;
use super::event::TuiMessage;
use super::layout;

/// Poll timeout of the blocking reader; bounds how long it lingers after quit.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Forward crossterm key events into the channel until the receiver is gone.
fn spawn_input_reader(tx: mpsc::UnboundedSender<TuiMessage>) {
    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(TuiMessage::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    debug!("input read failed: {e}");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                debug!("input poll failed: {e}");
                break;
            }
        }
    });
}

/// Drain messages into the app until it asks to quit or input ends.
/// Split from terminal setup so the loop runs against any backend.
pub async fn run_loop<F>(
    app: &mut TuiApp,
    rx: &mut mpsc::UnboundedReceiver<TuiMessage>,
    render_period: Duration,
    mut draw: F,
) -> anyhow::Result<()>
where
    F: FnMut(&mut TuiApp) -> anyhow::Result<()>,
{
    let mut render_interval = interval(render_period);

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                draw(app)?;
            }
            msg = rx.recv() => {
                match msg {
                    Some(msg) => app.update(msg),
                    None => app.update(TuiMessage::Quit),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(config: &GuideConfig) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = TuiApp::with_tab(config.start_tab());
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx);

    info!(
        tab = %app.active_tab(),
        fps = config.render_fps(),
        "terminal UI started"
    );

    let result = run_loop(&mut app, &mut rx, config.render_period(), |app| {
        terminal
            .draw(|f| layout::draw(f, app))
            .map(|_| ())
            .map_err(anyhow::Error::from)
    })
    .await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    info!("terminal UI stopped");
    result
}
