//! users-app binary entry point.
//!
//! Parses the (flagless) CLI surface, installs the tracing subscriber,
//! prints the startup banner, and runs the interactive command loop until
//! the operator quits.
//!
use crate::error::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod error;
mod prompt;
mod store;
mod ui;

/// Interactive CLI to manage an in-memory list of users.
///
/// All interaction happens through the prompt loop after startup; there are
/// no flags or subcommands beyond `--help`/`--version`.
#[derive(Parser, Debug)]
#[command(name = "users-app", version, about)]
struct Cli {}

/// Install an `EnvFilter`-driven subscriber writing to stderr, so log lines
/// never interleave with the prompts on stdout. Silent unless `RUST_LOG` is
/// set.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Program entry point: run the loop and report any top-level error to
/// stderr. Exit code is 0 either way.
fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    ui::print_banner();

    let mut prompter = prompt::DialoguerPrompter::new();
    let mut state = app::AppState::new();
    let res = app::run(&mut prompter, &mut state);

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
