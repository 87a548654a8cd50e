//! dashshell binary: terminal setup, the event loop, and exit codes.

use std::process::ExitCode;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;

use dashshell::app::{App, LoopControl};
use dashshell::error::UiError;
use dashshell::events::InputEvent;
use dashshell::startup::{init_tracing, ShellConfig};
use dashshell::terminal::{run_guarded, setup_panic_hook, TerminalManager};
use dashshell::ui;

fn main() -> ExitCode {
    if let Err(report) = color_eyre::install() {
        eprintln!("Error: {:?}", report);
        return ExitCode::FAILURE;
    }

    let config = ShellConfig::from_env();
    if let Err(e) = init_tracing(config.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    setup_panic_hook();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            eprintln!("Error: failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ExitCode::from(run_guarded(|| runtime.block_on(run(config))))
}

async fn run(config: ShellConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let tick_rate = config.tick_rate;

    let mut app = App::with_config(config);
    let (width, height) = manager.size()?;
    app.update_terminal_dimensions(width, height)?;

    let result = run_app(manager.terminal(), &mut app, tick_rate).await;

    // Restore before the caller prints anything.
    manager.restore()?;
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;
    let mut ticker = tokio::time::interval(tick_rate);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app.surface()))?;
            app.surface_mut().take_frame_request();
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                check(app.tick())?;
            }

            event = event_stream.next() => match event {
                Some(Ok(event)) => {
                    if let Some(input) = InputEvent::from_crossterm(event) {
                        check(app.handle_input(input))?;
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("Input stream closed");
                    return Ok(());
                }
            },

            Some(msg) = message_rx.recv() => {
                if check(app.handle_message(msg))? == Some(LoopControl::Exit) {
                    return Ok(());
                }
            }

            _ = &mut shutdown => {
                tracing::info!("Termination signal received, shutting down");
                return Ok(());
            }
        }
    }
}

/// Log recoverable shell errors and keep going; anything else is fatal.
fn check<T>(result: Result<T, UiError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(code = e.error_code(), "{}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
