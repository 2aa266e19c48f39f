use std::sync::Arc;
use std::time::Duration;

use super::updates::UpdateFeed;
use super::{Issued, RequestToken, ToolError, ToolKind, ToolOutcome, ToolRequest, ValidatedRequest};
use crate::catalog::updates::UpdateRecord;
use crate::notifications::{Notification, NotificationSink};

const UPDATE_REMINDER: &str = "Check your device settings for the update";

/// Whether the dispatcher waits before scoring, mimicking a remote call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimulatedLatency {
    #[default]
    Disabled,
    PerTool,
}

impl SimulatedLatency {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            SimulatedLatency::PerTool
        } else {
            SimulatedLatency::Disabled
        }
    }

    pub fn delay_for(&self, kind: ToolKind) -> Option<Duration> {
        match self {
            SimulatedLatency::Disabled => None,
            SimulatedLatency::PerTool => Some(kind.simulated_latency()),
        }
    }
}

/// Async front door for every tool: validates, scores and notifies.
pub struct ToolService<N> {
    notifications: Arc<N>,
    latency: SimulatedLatency,
    updates: UpdateFeed,
}

impl<N> ToolService<N>
where
    N: NotificationSink + 'static,
{
    pub fn new(notifications: Arc<N>, latency: SimulatedLatency) -> Self {
        Self {
            notifications,
            latency,
            updates: UpdateFeed::standard(),
        }
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }

    pub fn updates(&self) -> &UpdateFeed {
        &self.updates
    }

    /// Validate a form and, when it passes, score it under a fresh token.
    ///
    /// Rejected forms never reach the scoring functions and emit no
    /// notification; the caller shows the validation message inline.
    pub async fn submit(&self, request: ToolRequest) -> Result<Issued<ToolOutcome>, ToolError> {
        let kind = request.kind();
        let validated = request.validate().map_err(|error| {
            tracing::info!(tool = kind.label(), %error, "tool form rejected");
            error
        })?;
        self.compute(RequestToken::next(), validated).await
    }

    pub async fn compute(
        &self,
        token: RequestToken,
        request: ValidatedRequest,
    ) -> Result<Issued<ToolOutcome>, ToolError> {
        let kind = request.kind();
        if let Some(delay) = self.latency.delay_for(kind) {
            tokio::time::sleep(delay).await;
        }

        match request.evaluate() {
            Ok(outcome) => {
                tracing::info!(tool = kind.label(), request = token.0, "tool run completed");
                self.notifications
                    .notify(Notification::success(kind.success_message()))?;
                Ok(Issued::new(token, outcome))
            }
            Err(error) => {
                tracing::warn!(tool = kind.label(), request = token.0, %error, "tool run failed");
                self.notifications
                    .notify(Notification::error(kind.failure_message()))?;
                Err(error)
            }
        }
    }

    pub fn update(&self, id: u32) -> Result<&UpdateRecord, ToolError> {
        self.updates.find(id).ok_or_else(|| {
            tracing::debug!(update = id, "update missing from feed");
            ToolError::UpdateNotFound(id)
        })
    }

    /// Look up an update and remind the user where to install it.
    pub fn check_update(&self, id: u32) -> Result<&UpdateRecord, ToolError> {
        let update = self.update(id)?;
        self.notifications.notify(Notification::info(UPDATE_REMINDER))?;
        Ok(update)
    }
}
