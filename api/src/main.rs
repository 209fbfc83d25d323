use api::startup::{StartupError, build_app, serve};
use tracing::{error, info, warn};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use util::config;

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let log_guard = init_logging(&config::log_file(), &config::log_level());

    if let Some(raw) = config::unknown_service_mode() {
        warn!("unknown SERVICE_MODE `{raw}`, falling back to database");
    }

    let mode = config::service_mode();
    info!(
        "Starting {} in {} mode on http://{}",
        config::project_name(),
        mode,
        config::LISTEN_ADDR
    );

    let app = match build_app(mode, config::db_url().as_deref()).await {
        Ok(app) => app,
        Err(err) => fatal(err, log_guard),
    };

    if let Err(err) = serve(app).await {
        fatal(err, log_guard);
    }
}

/// Logs the error, flushes the file writer and exits with status 1.
fn fatal(err: StartupError, log_guard: WorkerGuard) -> ! {
    error!("{err}");
    drop(log_guard);
    std::process::exit(1);
}

fn init_logging(log_file: &str, log_level: &str) -> WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
