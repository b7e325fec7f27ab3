// RPNTTY: keypad-style RPN calculator for the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use rpntty::config::Cli;
use rpntty::engine::calculator::Calculator;
use rpntty::logging;
use rpntty::persist::{FileStore, KeyValueStore, MemoryStore};
use rpntty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir();

    let log_dir = if cli.ephemeral { None } else { data_dir.as_deref() };
    logging::init_tracing(log_dir);

    // Open the store; without one the session simply isn't persisted
    let store: Box<dyn KeyValueStore> = match (&data_dir, cli.ephemeral) {
        (Some(dir), false) => match FileStore::open(dir) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("Warning: cannot open data directory {}: {}", dir.display(), e);
                warn!(error = %e, "falling back to in-memory store");
                Box::new(MemoryStore::new())
            }
        },
        _ => Box::new(MemoryStore::new()),
    };

    let calculator = Calculator::new(store, cli.engine_config());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
