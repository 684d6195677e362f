//! redit entrypoint.
use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_model::EditorModel;
use core_render::writer::Writer;
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use core_text::LineBuffer;
use crossterm::event::{self, Event};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod keys;
use keys::Intent;

const LOG_FILE: &str = "redit.log";

const WELCOME: &str = "\
Welcome to redit.

Type to insert text at the cursor.
Enter opens a new line below the cursor.
Arrow keys move, PageUp / PageDown scroll.
Esc or Ctrl-Q quits.";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "redit", version, about = "Minimal terminal line editor")]
struct Args {
    /// Optional configuration file path (overrides discovery of `redit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self, fallback_filter: &str) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(()) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

enum Flow {
    Continue,
    Quit,
}

struct EditorRuntime {
    model: EditorModel,
    config: Config,
}

impl EditorRuntime {
    fn new(model: EditorModel, config: Config) -> Self {
        Self { model, config }
    }

    fn run(&mut self, terminal: &mut TerminalGuard<'_>) -> Result<()> {
        loop {
            self.repaint(terminal)?;
            match event::read()? {
                Event::Key(key) => {
                    let Some(intent) = keys::translate(&key) else {
                        continue;
                    };
                    let (_, height) = terminal.size()?;
                    if let Flow::Quit = self.handle(intent, height) {
                        info!(target: "runtime", "quit");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!(target: "runtime", width, height, "resize");
                }
                _ => {}
            }
        }
    }

    fn handle(&mut self, intent: Intent, height: u16) -> Flow {
        let res = match intent {
            Intent::Quit => return Flow::Quit,
            Intent::Type(c) => {
                let mut tmp = [0u8; 4];
                self.model.type_text(c.encode_utf8(&mut tmp))
            }
            Intent::OpenLine => self.model.open_line_below(),
            Intent::Move { dx, dy } => {
                self.model.move_cursor(dx, dy);
                Ok(())
            }
            Intent::PageUp | Intent::PageDown => {
                let step = isize::try_from(self.config.file.scroll.page_step(height))
                    .unwrap_or(isize::MAX);
                let dy = if intent == Intent::PageUp { -step } else { step };
                self.model.scroll_lines(dy);
                self.model.move_cursor(0, dy);
                Ok(())
            }
        };
        if let Err(e) = res {
            // Edits driven by the cursor can only miss at buffer edges; keep going.
            debug!(target: "runtime", error = %e, ?intent, "edit_ignored");
        }
        Flow::Continue
    }

    fn repaint(&mut self, terminal: &mut TerminalGuard<'_>) -> Result<()> {
        let (width, height) = terminal.size()?;
        self.model.follow_cursor(height);
        Writer::for_frame(&self.model.frame(width, height)).flush()?;
        if let Some((x, y)) = self.cursor_cell(width, height) {
            terminal.place_cursor(x, y)?;
        }
        Ok(())
    }

    /// Screen cell of the cursor, if it is inside the window.
    fn cursor_cell(&self, width: u16, height: u16) -> Option<(u16, u16)> {
        let cursor = self.model.cursor();
        let y = cursor.row.checked_sub(self.model.viewport().y_offset)?;
        let y = u16::try_from(y).ok().filter(|&y| y < height)?;
        let line = self.model.buffer().line_at(cursor.row).unwrap_or("");
        let col = line.get(..cursor.col).unwrap_or(line).width();
        let x = u16::try_from(col)
            .unwrap_or(u16::MAX)
            .min(width.saturating_sub(1));
        Some((x, y))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = core_config::load_from(args.config.clone())?;

    let mut startup = AppStartup::new();
    startup.configure_logging(&config.file.log.filter)?;
    AppStartup::install_panic_hook();

    let buffer = LineBuffer::from_text("welcome", WELCOME);
    let config_path = config.path.as_ref().map(|p| p.display().to_string());
    info!(
        target: "runtime.startup",
        buffer = buffer.name(),
        lines = buffer.line_count(),
        config = config_path.as_deref(),
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    startup.backend.set_title(&format!("redit - {}", buffer.name()))?;
    let mut terminal = startup.backend.enter_guard()?;
    let mut runtime = EditorRuntime::new(EditorModel::new(buffer), config);
    runtime.run(&mut terminal)
}
