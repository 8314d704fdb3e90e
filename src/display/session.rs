use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
    thread,
    time::Duration,
};

use chrono::NaiveDateTime;
use futures::StreamExt;
use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, info, instrument, warn};

use super::{PaneLayout, TerminalSize, render_frame};
use crate::{
    cli::{CliService, formatting::format_error},
    clock::{LocalClock, Ticker, TimeSource},
    config_store::{ConfigStore, FileEvent, FileWatcher},
    core::Result,
};

/// Quiet period after the last state file event before reloading.
pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const PROMPT: &str = "> ";

/// How `clockface run` behaves.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Draw a single frame and exit.
    pub once: bool,
    /// Whether the settings pane is available.
    pub settings: bool,
    /// State file to watch for edits from other processes.
    pub watch_path: Option<PathBuf>,
    /// Fixed size of the drawn frame, including the prompt line. `None`
    /// follows the terminal, re-queried for every frame.
    pub size: Option<TerminalSize>,
}

/// What the display loop does after an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Keep running.
    Continue,
    /// Leave the display loop.
    Quit,
}

/// State of one interactive display: the config, the pane layout and the
/// output of the last command.
pub struct Session {
    store: ConfigStore,
    layout: PaneLayout,
    cli: CliService,
    status: Option<String>,
}

impl Session {
    /// Creates a session over `store`.
    pub fn new(store: ConfigStore, layout: PaneLayout) -> Self {
        Self {
            store,
            layout,
            cli: CliService::new(),
            status: None,
        }
    }

    /// The config store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The pane layout.
    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    /// Output of the last command, shown after the prompt.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handles one line typed at the prompt.
    ///
    /// `s`/`settings` toggles the settings pane and `q`/`quit` ends the
    /// session. `set <field> <value>`, `reset` and `export [dir]` are
    /// shortcuts for the matching `config` commands. Anything else runs as
    /// `<category> <command> [args]` through the command registry.
    pub fn handle_input(&mut self, line: &str) -> InputOutcome {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["s" | "settings"] => {
                self.layout.toggle();
                self.status = None;
            }
            ["q" | "quit"] => return InputOutcome::Quit,
            ["help"] => {
                self.status = Some(match self.cli.help(None) {
                    Ok(help) => help,
                    Err(e) => format_error(&e.to_string()),
                });
            }
            ["set", field, value @ ..] => {
                let mut args = vec![(*field).to_string()];
                if !value.is_empty() {
                    args.push(value.join(" "));
                }
                self.run_command("config", "set", &args);
            }
            ["set"] => self.run_command("config", "set", &[]),
            ["reset"] => self.run_command("config", "reset", &[]),
            ["export", dir @ ..] => {
                let args: Vec<String> = dir.iter().map(|d| (*d).to_string()).collect();
                self.run_command("config", "export", &args);
            }
            [category, rest @ ..] => {
                let (command, args): (&str, &[&str]) = match rest {
                    [command, args @ ..] => (*command, args),
                    [] => ("", &[][..]),
                };
                let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
                self.run_command(category, command, &args);
            }
        }

        InputOutcome::Continue
    }

    /// Re-reads the persisted state. Returns whether the config changed.
    pub fn reload(&mut self) -> bool {
        let changed = self.store.reload();
        if changed {
            info!("Reloaded clock config from {}", self.store.storage_location());
        }
        changed
    }

    /// Renders the frame for `instant` followed by the prompt line.
    pub fn frame(&self, instant: NaiveDateTime, size: TerminalSize) -> String {
        let clock_size = TerminalSize {
            columns: size.columns,
            rows: size.rows.saturating_sub(1),
        };

        let mut frame = render_frame(instant, self.store.get(), &self.layout, clock_size);
        frame.push('\n');
        frame.push_str(PROMPT);
        if let Some(status) = &self.status {
            frame.push_str(status);
        }
        frame
    }

    fn run_command(&mut self, category: &str, command: &str, args: &[String]) {
        let result = self
            .cli
            .execute_command(&mut self.store, category, command, args);

        self.status = Some(match result {
            Ok(output) => output,
            Err(e) => {
                warn!("Command '{category} {command}' failed: {e}");
                format_error(&e.to_string())
            }
        });
    }
}

/// Runs the clock display until `q`, Ctrl-C or end of input.
///
/// The frame is redrawn on every tick, after every input line and after the
/// state file changed on disk. File events are debounced by
/// [`RELOAD_DEBOUNCE`]. Without `options.once` the loop owns the store for
/// its whole lifetime.
///
/// # Errors
/// Returns error if writing to stdout fails.
#[instrument(skip_all, fields(once = options.once, settings = options.settings))]
pub async fn run(store: ConfigStore, options: RunOptions) -> Result<()> {
    let layout = if options.settings {
        PaneLayout::default()
    } else {
        PaneLayout::clock_only()
    };
    let mut session = Session::new(store, layout);

    if options.once {
        let mut frame = render_frame(
            LocalClock.now(),
            session.store().get(),
            &PaneLayout::clock_only(),
            options.size.unwrap_or_else(TerminalSize::detect),
        );
        frame.push('\n');
        return write_output(&frame);
    }

    info!("Starting clock display");

    let ticker = Ticker::start(Arc::new(LocalClock));
    let (_watcher, file_events) = match options.watch_path.as_deref().map(FileWatcher::watch) {
        Some(Ok((watcher, events))) => (Some(watcher), Some(events)),
        Some(Err(e)) => {
            warn!("Live reload disabled: {e}");
            (None, None)
        }
        None => (None, None),
    };
    let input = spawn_input_reader();

    write_output(HIDE_CURSOR)?;
    let result = event_loop(&mut session, &ticker, file_events, input, options.size).await;

    ticker.stop();
    write_output(&format!("{SHOW_CURSOR}\n"))?;
    info!("Clock display stopped");

    result
}

async fn event_loop(
    session: &mut Session,
    ticker: &Ticker,
    mut file_events: Option<mpsc::UnboundedReceiver<FileEvent>>,
    mut input: mpsc::UnboundedReceiver<String>,
    size: Option<TerminalSize>,
) -> Result<()> {
    let ticks = ticker.watch();
    tokio::pin!(ticks);

    let debounce = tokio::time::sleep(RELOAD_DEBOUNCE);
    tokio::pin!(debounce);
    let mut reload_pending = false;

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    let mut interrupt_armed = true;
    let mut input_open = true;

    let mut instant = ticker.now();

    loop {
        tokio::select! {
            Some(now) = ticks.next() => {
                instant = now;
            }

            Some(event) = next_file_event(&mut file_events) => {
                debug!("State file event: {:?} {}", event.kind, event.path.display());
                reload_pending = true;
                debounce.as_mut().reset(Instant::now() + RELOAD_DEBOUNCE);
                continue;
            }

            _ = &mut debounce, if reload_pending => {
                reload_pending = false;
                if !session.reload() {
                    continue;
                }
            }

            line = input.recv(), if input_open => match line {
                Some(line) => {
                    if session.handle_input(&line) == InputOutcome::Quit {
                        return Ok(());
                    }
                }
                None => {
                    debug!("Standard input closed");
                    input_open = false;
                }
            },

            signal = &mut interrupt, if interrupt_armed => match signal {
                Ok(()) => {
                    debug!("Interrupted");
                    return Ok(());
                }
                Err(e) => {
                    warn!("Ctrl-C handling unavailable: {e}");
                    interrupt_armed = false;
                }
            },
        }

        let frame = session.frame(instant, size.unwrap_or_else(TerminalSize::detect));
        write_output(&format!("{CLEAR_SCREEN}{frame}"))?;
    }
}

/// Reads stdin lines on a dedicated thread.
///
/// A blocking read cannot be cancelled, so the thread is left detached and
/// ends with the process. The channel closes at end of input.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    let spawned = thread::Builder::new()
        .name("clockface-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read input: {e}");
                        break;
                    }
                }
            }
        });

    if let Err(e) = spawned {
        warn!("Input disabled: {e}");
    }

    line_rx
}

async fn next_file_event(
    events: &mut Option<mpsc::UnboundedReceiver<FileEvent>>,
) -> Option<FileEvent> {
    match events {
        Some(events) => events.recv().await,
        None => std::future::pending().await,
    }
}

fn write_output(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
