//! Request/response lifecycle for one tool page.
//!
//! A session moves `idle → validating → computing → succeeded | failed` and
//! back to `idle` on reset. Every accepted submission is keyed by a fresh
//! [`RequestToken`]; a completion is applied only when it carries the latest
//! token, so a slow earlier run can never overwrite a newer result.

use crate::directory::Route;
use crate::notifications::NotificationSink;
use crate::tools::{
    Issued, RequestToken, ToolError, ToolKind, ToolOutcome, ToolRequest, ToolService,
    ValidatedRequest, ValidationError,
};

#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    Validating,
    Rejected(ValidationError),
    Computing { token: RequestToken },
    Succeeded(Issued<ToolOutcome>),
    Failed { message: &'static str },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Validating => "validating",
            SessionState::Rejected(_) => "rejected",
            SessionState::Computing { .. } => "computing",
            SessionState::Succeeded(_) => "succeeded",
            SessionState::Failed { .. } => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Computing { .. })
    }

    pub fn result(&self) -> Option<&Issued<ToolOutcome>> {
        match self {
            SessionState::Succeeded(issued) => Some(issued),
            _ => None,
        }
    }
}

/// A validated submission waiting for its computation.
#[derive(Debug, Clone)]
pub struct PendingRun {
    pub token: RequestToken,
    pub request: ValidatedRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct ToolSession {
    kind: ToolKind,
    state: SessionState,
    latest: Option<RequestToken>,
}

impl ToolSession {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            state: SessionState::Idle,
            latest: None,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Validate a submission and, when it passes, move to `computing`.
    pub fn begin(&mut self, request: ToolRequest) -> Result<PendingRun, ValidationError> {
        if request.kind() != self.kind {
            return Err(ValidationError::ToolMismatch {
                expected: self.kind,
                actual: request.kind(),
            });
        }

        self.state = SessionState::Validating;
        match request.validate() {
            Ok(request) => {
                let token = RequestToken::next();
                self.latest = Some(token);
                self.state = SessionState::Computing { token };
                Ok(PendingRun { token, request })
            }
            Err(error) => {
                self.state = SessionState::Rejected(error.clone());
                Err(error)
            }
        }
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<Issued<ToolOutcome>, ToolError>,
    ) -> Completion {
        let current = matches!(self.state, SessionState::Computing { token: active } if active == token);
        if self.latest != Some(token) || !current {
            tracing::debug!(
                tool = self.kind.label(),
                request = token.0,
                "discarding stale tool completion"
            );
            return Completion::Stale;
        }

        self.state = match result {
            Ok(issued) => SessionState::Succeeded(issued),
            Err(_) => SessionState::Failed {
                message: self.kind.retry_message(),
            },
        };
        Completion::Applied
    }

    /// Back to `idle`; any run still in flight becomes stale.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.latest = None;
    }

    /// Drive one submission through the service and apply its completion.
    pub async fn run<N>(
        &mut self,
        service: &ToolService<N>,
        request: ToolRequest,
    ) -> Result<Completion, ValidationError>
    where
        N: NotificationSink + 'static,
    {
        let pending = self.begin(request)?;
        let result = service.compute(pending.token, pending.request).await;
        Ok(self.complete(pending.token, result))
    }
}

/// The currently displayed route and the session of the tool it shows.
#[derive(Debug, Clone)]
pub struct Workspace {
    route: Route,
    session: Option<ToolSession>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            route: Route::Home,
            session: None,
        }
    }
}

impl Workspace {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> Option<&ToolSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ToolSession> {
        self.session.as_mut()
    }

    /// Switch routes. The previous session is dropped even when the route is unchanged.
    pub fn navigate(&mut self, route: Route) -> Option<&mut ToolSession> {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "navigating");
        self.route = route;
        self.session = route.tool().map(ToolSession::new);
        self.session.as_mut()
    }
}

#[cfg(test)]
mod tests;
