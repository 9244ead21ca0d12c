//! typeahead - country autocomplete in the terminal
//!
//! Hosts the autocomplete widget in a reedline prompt.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! typeahead
//!
//! # One-shot query
//! typeahead query Al
//! ```

use tracing::{Level, info};

use typeahead::cli::CliInterface;
use typeahead::error::Result;
use typeahead::loader;
use typeahead::repl::{ReplEngine, Response, SharedState};
use typeahead::widget::Autocomplete;

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive host
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand().await? {
        return Ok(());
    }

    cli.print_banner();

    run_interactive_mode(&cli)
}

/// Run application in interactive REPL mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let widget = Autocomplete::mount(loader::from_config(&cli.config().loader));
    let shared_state = SharedState::new(widget, &cli.config().display);
    let mut repl = ReplEngine::new(shared_state.clone())?;

    let result = run_repl_loop(&mut repl);
    shared_state.teardown();
    info!("Widget torn down");
    result?;

    println!("Goodbye!");
    Ok(())
}

/// Main REPL loop
fn run_repl_loop(repl: &mut ReplEngine) -> Result<()> {
    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) => line,
            None => break,
        };

        match repl.handle_line(&input) {
            Response::Message(msg) => println!("{}", msg),
            Response::Nothing => {}
            Response::Exit => break,
        }
    }

    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
