use galaxy_toolkit::notifications::{Notification, NotificationError, NotificationSink};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collects notifications so the CLI can print them after a run.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationSink {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationSink for InMemoryNotificationSink {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotificationError::Transport("notification buffer poisoned".to_string()))?;
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryNotificationSink {
    /// Take every buffered notification, oldest first.
    pub(crate) fn drain(&self) -> Vec<Notification> {
        match self.events.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => Vec::new(),
        }
    }
}

/// Parse a CLI value using the same wire name the JSON API accepts.
pub(crate) fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|_| format!("'{raw}' is not a recognised value"))
}
