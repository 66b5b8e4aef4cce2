//! aihub CLI entry point.

use std::process::ExitCode;

use aihub::cli::{Cli, CommandDispatcher};
use aihub::paths::HubPaths;
use aihub::ui::{load_theme, should_use_colors, Theme, ThemeId};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("aihub=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aihub=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("aihub starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let paths = HubPaths::resolve(cli.hub.as_deref());

    let theme = if should_use_colors() {
        load_theme(&paths)
    } else {
        Theme::new(ThemeId::Plain)
    };

    let dispatcher = CommandDispatcher::new(paths, cli.library.clone());

    match dispatcher.dispatch(&cli, &theme) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", theme.format_error(&e.to_string()));
            ExitCode::from(1)
        }
    }
}
