//! Watch mode execution

use super::SessionData;
use super::commands::{Command, help_text, parse_command};
use super::messages::{print_session_shutdown, print_session_starting, print_written};
use super::setup::{finish_session, write_snapshot};
use crate::actions::Action;
use crate::consts::dashboard_consts::interaction::{frame_interval, snapshot_throttle};
use crate::dashboard::{DashboardController, UiEvent, now};
use crate::error::DashboardError;
use crate::pretty::print_cmd_warn;
use crate::timing::Throttle;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Runs the dashboard until `quit` or Ctrl+C
///
/// This function handles:
/// 1. Controller start (initial load, polling, visibility listener)
/// 2. Stdin commands
/// 3. Frame ticks and throttled snapshot writes
pub async fn run_watch_mode(session: SessionData) -> Result<(), DashboardError> {
    print_session_starting(&session.api_url, &session.snapshot_path);

    // Trigger shutdown on Ctrl+C, the initial load included
    let shutdown = CancellationToken::new();
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_shutdown.cancel();
        }
    });

    watch(&session, BufReader::new(tokio::io::stdin()), shutdown).await?;
    print_written("Snapshot", &session.snapshot_path);
    Ok(())
}

async fn watch<R>(
    session: &SessionData,
    input: R,
    shutdown: CancellationToken,
) -> Result<(), DashboardError>
where
    R: AsyncBufRead + Unpin,
{
    let controller = session.controller.clone();
    tokio::select! {
        _ = shutdown.cancelled() => log::info!("Shutdown requested during the initial load"),
        _ = controller.start() => {}
    }

    let mut lines = input.lines();
    let mut stdin_open = true;
    let (events, worker) = spawn_event_worker(controller.clone());

    let mut frames = tokio::time::interval(frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut throttle = Throttle::new(snapshot_throttle());
    let mut pending_write = false;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => println!("{}", help_text()),
                    Ok(Some(Command::Ui(event))) => {
                        if events.send(event).is_err() {
                            log::warn!("Event worker is gone, dropping input");
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        print_cmd_warn!("Invalid command", "{}", e);
                    }
                },
                Ok(None) => {
                    log::debug!("stdin closed, waiting for Ctrl+C");
                    stdin_open = false;
                }
                Err(e) => {
                    log::warn!("Failed to read stdin: {}", e);
                    stdin_open = false;
                }
            },
            _ = frames.tick() => {
                controller.tick().await;
                pending_write |= controller.take_dirty().await;
                let at = now();
                if pending_write && throttle.try_acquire(at) {
                    pending_write = false;
                    if let Err(e) = write_snapshot(&controller, &session.snapshot_path).await {
                        log::error!("Failed to write snapshot: {}", e);
                    }
                } else if pending_write {
                    log::trace!("Snapshot deferred by {:?}", throttle.time_until_next(at));
                }
            }
        }
    }

    print_session_shutdown();
    drop(events);
    worker.abort();
    let _ = worker.await;
    finish_session(&controller, &session.snapshot_path).await
}

/// Handles UI events one at a time, in the order they were read.
///
/// Refreshes are detached so a slow load never holds back later input.
fn spawn_event_worker(
    controller: DashboardController,
) -> (mpsc::UnboundedSender<UiEvent>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if matches!(event, UiEvent::Click(Action::Refresh)) {
                controller.spawn_refresh("refresh command");
                continue;
            }
            if let Err(e) = controller.handle_event(event).await {
                log::error!("Failed to handle event: {}", e);
            }
        }
    });
    (tx, handle)
}
