//! qrdrop binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod camera;
mod events;
mod i18n;
mod logic;
mod qr;
mod settings;
mod state;
mod theme;
mod ui;
mod upload;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

/// Timestamp formatter for the file log.
struct QrdropTimer;

impl tracing_subscriber::fmt::time::FormatTime for QrdropTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S");
        w.write_str(&ts.to_string())
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    // Initialize tracing logger writing to ~/.config/qrdrop/logs/qrdrop.log
    {
        let mut log_path = crate::util::logs_dir();
        log_path.push("qrdrop.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(QrdropTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(QrdropTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let cli_args = args::Args::parse();
    tracing::info!(
        form = ?cli_args.form,
        no_upload = cli_args.no_upload,
        "qrdrop starting"
    );
    if let Err(err) = app::run(cli_args).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("qrdrop exited");
}
