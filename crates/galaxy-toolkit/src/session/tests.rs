use super::*;
use crate::notifications::TracingNotificationSink;
use crate::tools::battery::BatteryForm;
use crate::tools::trade_in::{DeviceCondition, StorageTier, TradeInForm};
use crate::tools::updates::UpdateQuery;
use crate::tools::SimulatedLatency;
use std::sync::Arc;

fn trade_in(condition: DeviceCondition) -> ToolRequest {
    ToolRequest::TradeIn(TradeInForm {
        model: Some("Galaxy S24".to_string()),
        condition: Some(condition),
        storage: Some(StorageTier::Gb128),
    })
}

fn estimated_value(state: &SessionState) -> Option<u32> {
    match state.result().map(|issued| &issued.result) {
        Some(ToolOutcome::TradeIn(estimate)) => Some(estimate.estimated_value),
        _ => None,
    }
}

#[test]
fn stale_completion_never_overwrites_a_newer_run() {
    let mut session = ToolSession::new(ToolKind::TradeIn);
    let first = session.begin(trade_in(DeviceCondition::Poor)).expect("valid");
    let second = session.begin(trade_in(DeviceCondition::Excellent)).expect("valid");
    assert!(session.state().is_loading());

    let second_result = second.request.evaluate().map(|o| Issued::new(second.token, o));
    assert_eq!(session.complete(second.token, second_result), Completion::Applied);

    let first_result = first.request.evaluate().map(|o| Issued::new(first.token, o));
    assert_eq!(session.complete(first.token, first_result), Completion::Stale);
    assert_eq!(estimated_value(session.state()), Some(550));
}

#[test]
fn out_of_order_arrival_keeps_waiting_for_the_latest() {
    let mut session = ToolSession::new(ToolKind::TradeIn);
    let first = session.begin(trade_in(DeviceCondition::Poor)).expect("valid");
    let second = session.begin(trade_in(DeviceCondition::Good)).expect("valid");

    let first_result = first.request.evaluate().map(|o| Issued::new(first.token, o));
    assert_eq!(session.complete(first.token, first_result), Completion::Stale);
    match session.state() {
        SessionState::Computing { token } => assert_eq!(*token, second.token),
        other => panic!("expected computing, got {other:?}"),
    }
}

#[test]
fn rejected_forms_leave_no_pending_run() {
    let mut session = ToolSession::new(ToolKind::BatteryHealth);
    let error = session
        .begin(ToolRequest::BatteryHealth(BatteryForm::default()))
        .expect_err("empty form");
    assert_eq!(error, ValidationError::MissingField("model"));
    assert_eq!(session.state().name(), "rejected");
}

#[test]
fn forms_for_another_tool_are_refused() {
    let mut session = ToolSession::new(ToolKind::UpdateTracker);
    let error = session
        .begin(trade_in(DeviceCondition::Good))
        .expect_err("wrong tool");
    assert_eq!(
        error,
        ValidationError::ToolMismatch {
            expected: ToolKind::UpdateTracker,
            actual: ToolKind::TradeIn,
        }
    );
    assert_eq!(session.state().name(), "idle");
}

#[test]
fn failures_show_the_retry_message() {
    let mut session = ToolSession::new(ToolKind::PhoneComparison);
    let pending = session
        .begin(ToolRequest::PhoneComparison(crate::tools::comparison::ComparisonForm {
            model1: Some("Galaxy S24".to_string()),
            model2: Some("Galaxy S5".to_string()),
        }))
        .expect("valid");
    let result = pending.request.evaluate().map(|o| Issued::new(pending.token, o));
    assert_eq!(session.complete(pending.token, result), Completion::Applied);
    match session.state() {
        SessionState::Failed { message } => {
            assert_eq!(*message, "Failed to compare phones. Please try again.")
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn reset_discards_in_flight_runs() {
    let mut session = ToolSession::new(ToolKind::TradeIn);
    let pending = session.begin(trade_in(DeviceCondition::Good)).expect("valid");
    session.reset();
    let result = pending.request.evaluate().map(|o| Issued::new(pending.token, o));
    assert_eq!(session.complete(pending.token, result), Completion::Stale);
    assert_eq!(session.state().name(), "idle");
}

#[test]
fn navigation_replaces_the_active_session() {
    let mut workspace = Workspace::default();
    assert!(workspace.session().is_none());

    let session = workspace
        .navigate(Route::Tool(ToolKind::TradeIn))
        .expect("tool route has a session");
    session.begin(trade_in(DeviceCondition::Good)).expect("valid");

    workspace.navigate(Route::Tool(ToolKind::UpdateTracker));
    let session = workspace.session().expect("session");
    assert_eq!(session.kind(), ToolKind::UpdateTracker);
    assert_eq!(session.state().name(), "idle");

    workspace.navigate(Route::Home);
    assert!(workspace.session().is_none());
    assert_eq!(workspace.route().path(), "/");
}

#[tokio::test]
async fn run_drives_a_submission_to_success() {
    let service = ToolService::new(Arc::new(TracingNotificationSink), SimulatedLatency::Disabled);
    let mut session = ToolSession::new(ToolKind::UpdateTracker);

    let completion = session
        .run(&service, ToolRequest::UpdateTracker(UpdateQuery::default()))
        .await
        .expect("valid");
    assert_eq!(completion, Completion::Applied);
    assert_eq!(session.state().name(), "succeeded");
}
