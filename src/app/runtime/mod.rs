//! The application runtime: initialization, background workers, the main
//! event loop and teardown.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::args::Args;
use crate::i18n::Catalog;
use crate::settings;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod handlers;
mod workers;

use channels::Channels;
use handlers::{handle_camera_event, handle_tick, handle_upload_outcome};
use workers::{spawn_camera_worker, spawn_event_thread, spawn_tick_worker, spawn_upload_worker};

/// Fallible plumbing result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the qrdrop TUI end-to-end: initialize terminal and state,
/// spawn background workers (event reader, upload, camera, tick), drive
/// the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command line arguments
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   or startup errors.
///
/// Details:
/// - The upload and camera workers own their blocking work; the loop owns
///   all state mutation. Dropping the channels on exit closes the camera
///   worker's command queue, which drops its session and releases any
///   open stream before the terminal is restored.
pub async fn run(args: Args) -> Result<()> {
    let headless = std::env::var("QRDROP_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let settings = settings::load();
    let catalog = Catalog::embedded()?;
    let mut app = AppState {
        form_kind: args.form.into(),
        no_upload: args.no_upload,
        catalog,
        ..AppState::default()
    };
    if let Some(lang) = args.lang {
        app.language = lang.into();
    }

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    if let Some(upload_req_rx) = channels.take_upload_req_rx() {
        spawn_upload_worker(
            upload_req_rx,
            channels.upload_res_tx.clone(),
            crate::upload::UploadConfig::from_settings(&settings),
            app.no_upload,
        );
    }
    if let Some(camera_cmd_rx) = channels.take_camera_cmd_rx() {
        spawn_camera_worker(
            camera_cmd_rx,
            channels.camera_evt_tx.clone(),
            settings.camera.clone(),
        );
    }
    spawn_tick_worker(channels.tick_tx.clone());

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    ev,
                    &mut app,
                    &channels.upload_req_tx,
                    &channels.camera_cmd_tx,
                ) {
                    break;
                }
            }
            Some(outcome) = channels.upload_res_rx.recv() => {
                handle_upload_outcome(&mut app, outcome);
            }
            Some(evt) = channels.camera_evt_rx.recv() => {
                handle_camera_event(&mut app, evt, &channels.upload_req_tx);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(&mut app);
            }
            else => break,
        }
    }

    // Signal the event reading thread to exit immediately
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
