//! Contact Book - Main entry point
//!
//! Runs the interactive assistant bot: reads commands from stdin, prints
//! replies to stdout, and saves the address book on exit.

use anyhow::{Context, Result};
use contact_book::{Config, JsonFileRepository, Outcome, Session};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.data_file.display());

    let repository = JsonFileRepository::new(config.data_file.clone());
    let mut session = Session::open(repository, &config).with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.data_file.display()
        )
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the assistant bot!")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                // End of input behaves like `exit`.
                writeln!(stdout)?;
                if let Err(e) = session.save() {
                    error!("Failed to save address book: {}", e);
                    return Err(e).context("Failed to save address book");
                }
                writeln!(stdout, "Good bye!")?;
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Outcome::Continue(message) => writeln!(stdout, "{}", message)?,
            Outcome::Exit(message) => {
                writeln!(stdout, "{}", message)?;
                break;
            }
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
