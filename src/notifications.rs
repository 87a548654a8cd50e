//! Transient status-bar notifications.
//!
//! [`NotificationTimer`] holds at most one live [`Notification`]. Showing a
//! new one replaces the old one and re-arms the expiry. Expiry is a spawned
//! tokio task that sleeps and then posts
//! [`AppMessage::NotificationExpired`] to the shell's channel; the task
//! never touches the slot itself, so the render path never waits on it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::app::AppMessage;
use crate::ui::theme::Role;

/// Default time a notification stays visible.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

// ============================================================================
// Notification Types
// ============================================================================

/// Severity of a notification. Each maps to the theme role of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn role(self) -> Role {
        match self {
            Severity::Info => Role::Info,
            Severity::Success => Role::Success,
            Severity::Warning => Role::Warning,
            Severity::Error => Role::Error,
        }
    }
}

/// A message waiting to be shown. Views return these instead of touching
/// the timer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// The live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

// ============================================================================
// Notification Timer
// ============================================================================

/// Single-slot, cancellable, auto-expiring notification holder.
#[derive(Debug)]
pub struct NotificationTimer {
    current: Option<Notification>,
    /// Bumped on every show and clear. Expiry messages carry the value
    /// they were armed with; anything else is stale.
    generation: u64,
    pending: Option<JoinHandle<()>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl NotificationTimer {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            current: None,
            generation: 0,
            pending: None,
            message_tx,
        }
    }

    /// Replace the live notification and arm its expiry.
    ///
    /// Returns the generation the expiry message will carry. When no tokio
    /// runtime is running the notification is stored but never expires on
    /// its own.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) -> u64 {
        self.cancel_pending();
        self.generation += 1;
        let generation = self.generation;
        let message = message.into();

        tracing::trace!(generation, ?severity, "Showing notification: {}", message);

        self.current = Some(Notification {
            message,
            severity,
            expires_at: Instant::now() + duration,
        });

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let message_tx = self.message_tx.clone();
                self.pending = Some(handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    let _ = message_tx.send(AppMessage::NotificationExpired { generation });
                }));
            }
            Err(_) => {
                tracing::debug!(generation, "No runtime available; notification will not auto-expire");
            }
        }

        generation
    }

    pub fn show_notice(&mut self, notice: Notice, duration: Duration) -> u64 {
        self.show(notice.message, notice.severity, duration)
    }

    /// Drop the live notification and cancel its expiry. No-op when empty.
    pub fn clear(&mut self) {
        self.cancel_pending();
        if self.current.take().is_some() {
            self.generation += 1;
            tracing::trace!(generation = self.generation, "Notification cleared");
        }
    }

    /// Handle an expiry message. Returns true if the live notification was
    /// removed, false if the generation is stale.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            tracing::trace!(generation, current = self.generation, "Ignoring stale expiry");
            return false;
        }
        self.pending = None;
        self.current = None;
        tracing::trace!(generation, "Notification expired");
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an expiry task is armed and has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
