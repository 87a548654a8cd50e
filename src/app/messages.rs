//! Messages posted to the event loop by background tasks.

/// Messages received from timer tasks.
///
/// Tasks never touch shell state; they only send one of these through a
/// clone of `App::message_tx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A notification's display time ran out. Stale generations are ignored.
    NotificationExpired { generation: u64 },
    /// The goodbye overlay has been up for the configured grace period.
    QuitGraceElapsed,
}

/// Whether the run loop keeps going after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
