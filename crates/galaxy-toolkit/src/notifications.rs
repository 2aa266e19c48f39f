//! Outbound user notifications emitted when a tool run finishes.
//!
//! The library only decides *what* to say; rendering (toasts, terminal lines,
//! log records) belongs to whichever [`NotificationSink`] the caller wires in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

/// Boundary for delivering notifications to whoever presents them.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sink that turns notifications into log records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        match notification.kind {
            NotificationKind::Error => {
                tracing::warn!(kind = notification.kind.as_str(), "{}", notification.message)
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = notification.kind.as_str(), "{}", notification.message)
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notification::success("done").kind, NotificationKind::Success);
        assert_eq!(Notification::error("nope").kind, NotificationKind::Error);
        assert_eq!(Notification::info("fyi").message, "fyi");
    }

    #[test]
    fn tracing_sink_accepts_every_kind() {
        let sink = TracingNotificationSink;
        for notification in [
            Notification::success("a"),
            Notification::error("b"),
            Notification::info("c"),
        ] {
            assert!(sink.notify(notification).is_ok());
        }
    }

    #[test]
    fn kind_serializes_lowercase() {
        let value = serde_json::to_value(Notification::info("Check your device settings"))
            .expect("serializes");
        assert_eq!(value["kind"], "info");
    }
}
