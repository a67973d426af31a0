use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use sqlhint::app::App;
use sqlhint::config::{self, Config};

/// How often the loop wakes to poll the debounce deadline and worker
/// responses when no input arrives
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(
    name = "sqlhint",
    about = "Interactive SQL console with inline AI completions",
    version
)]
struct Cli {
    /// Path to a config file (default: <config_dir>/sqlhint/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Completion service endpoint, overriding the config file
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.completion.endpoint = endpoint;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);

    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.poll_responses();
        app.check_idle_trigger(Instant::now());
    }

    Ok(())
}

/// Debug builds log to sqlhint.log so the TUI stays intact; release builds
/// don't log at all.
#[cfg(debug_assertions)]
fn init_logging() {
    if let Ok(file) = std::fs::File::create("sqlhint.log") {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
