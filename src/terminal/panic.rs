//! Panic hook that gives the terminal back before the message is printed.

use super::setup::emergency_restore;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Exit status for a run that failed or panicked.
pub const FAULT_EXIT_CODE: u8 = 1;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call this after `color_eyre::install()` so the eyre panic report is the
/// hook that runs second.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::error!(%location, "Panic: {}", payload_message(panic_info.payload()));
        original_hook(panic_info);
    }));
}

/// Run `f`, turning a panic into `Err` with the panic message.
pub fn catch_fault<F, R>(f: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| payload_message(payload.as_ref()))
}

/// Run the shell body and map its outcome to a process exit status.
/// Errors and panics both exit with [`FAULT_EXIT_CODE`].
pub fn run_guarded<F>(f: F) -> u8
where
    F: FnOnce() -> color_eyre::Result<()>,
{
    match catch_fault(f) {
        Ok(Ok(())) => 0,
        Ok(Err(report)) => {
            tracing::error!("Fatal: {:?}", report);
            eprintln!("Error: {:?}", report);
            FAULT_EXIT_CODE
        }
        Err(message) => {
            tracing::error!("Shell panicked: {}", message);
            FAULT_EXIT_CODE
        }
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }

    #[test]
    fn test_catch_fault_passes_value_through() {
        assert_eq!(catch_fault(|| 7), Ok(7));
    }

    #[test]
    fn test_catch_fault_returns_panic_message() {
        let outcome: Result<(), String> = catch_fault(|| panic!("boom"));
        assert_eq!(outcome, Err("boom".to_string()));
    }

    #[test]
    fn test_clean_run_exits_zero() {
        assert_eq!(run_guarded(|| Ok(())), 0);
    }

    #[test]
    fn test_error_exits_one() {
        assert_eq!(run_guarded(|| Err(color_eyre::eyre::eyre!("no tty"))), 1);
    }

    #[test]
    fn test_panic_exits_one() {
        assert_eq!(run_guarded(|| panic!("boom")), 1);
    }

    #[test]
    fn test_formatted_panic_message_is_kept() {
        let view = "data";
        let outcome: Result<(), String> = catch_fault(|| panic!("render failed in {}", view));
        assert_eq!(outcome, Err("render failed in data".to_string()));
    }
}
