//! ui-kit Gallery - Main Entry Point
//!
//! Opens a window showing every widget in the kit.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ui_kit::app::application::run_app;
use ui_kit::helpers::get_or_create_data_dir;

fn main() {
    let _log_guard = init_tracing();

    tracing::info!("Starting ui-kit gallery...");

    // Run the GPUI application
    run_app();
}

/// Log to stderr and, when the data directory is available, to a daily file
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "ui-kit.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            registry.init();
            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}
