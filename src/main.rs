//! vs-history CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vs_history::cli::{Cli, CommandDispatcher};
use vs_history::context::AppContext;
use vs_history::history::{FixedLocator, HistoryStoreLocator, PlatformLocator};
use vs_history::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so tables and JSON on stdout stay clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vs_history=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vs_history=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vs-history starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let locator: Box<dyn HistoryStoreLocator> = match &cli.store {
        Some(path) => Box::new(FixedLocator::new(path.clone())),
        None => Box::new(PlatformLocator::new(cli.editor)),
    };

    let mut ui = create_ui(true, output_mode);

    let cwd = match std::env::current_dir().context("Cannot determine current directory") {
        Ok(cwd) => cwd,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            return ExitCode::from(1);
        }
    };
    let dispatcher = CommandDispatcher::new(AppContext::new(locator, cwd));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
