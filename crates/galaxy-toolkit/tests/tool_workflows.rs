//! End-to-end scenarios for the device tools, driven through the public workspace,
//! session and service facade the way a front end would use them.

mod common {
    use std::sync::{Arc, Mutex};

    use galaxy_toolkit::notifications::{Notification, NotificationError, NotificationSink};
    use galaxy_toolkit::tools::{SimulatedLatency, ToolService};

    #[derive(Default, Clone)]
    pub(super) struct RecordingSink {
        events: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingSink {
        pub(super) fn events(&self) -> Vec<Notification> {
            self.events.lock().expect("sink mutex poisoned").clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
            self.events
                .lock()
                .expect("sink mutex poisoned")
                .push(notification);
            Ok(())
        }
    }

    pub(super) fn service() -> (ToolService<RecordingSink>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (
            ToolService::new(sink.clone(), SimulatedLatency::Disabled),
            sink,
        )
    }
}

use galaxy_toolkit::directory::Route;
use galaxy_toolkit::notifications::NotificationKind;
use galaxy_toolkit::session::{Completion, SessionState, Workspace};
use galaxy_toolkit::tools::{ToolKind, ToolOutcome, ToolRequest, ValidationError};
use serde_json::json;

fn wire_request(value: serde_json::Value) -> ToolRequest {
    serde_json::from_value(value).expect("request matches the wire format")
}

#[tokio::test]
async fn trade_in_runs_from_wire_request_to_result() {
    let (service, sink) = common::service();
    let mut workspace = Workspace::default();
    let session = workspace
        .navigate(Route::Tool(ToolKind::TradeIn))
        .expect("tool routes open a session");

    let request = wire_request(json!({
        "tool": "trade-in",
        "form": { "model": "Galaxy S24", "condition": "good", "storage": "128GB" }
    }));
    let completion = session.run(&service, request).await.expect("form is valid");
    assert_eq!(completion, Completion::Applied);

    let issued = session.state().result().expect("result is displayed");
    match &issued.result {
        ToolOutcome::TradeIn(estimate) => assert_eq!(estimate.estimated_value, 440),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Success);
    assert_eq!(events[0].message, ToolKind::TradeIn.success_message());
}

#[tokio::test]
async fn unknown_comparison_model_leaves_retry_message() {
    let (service, sink) = common::service();
    let mut workspace = Workspace::default();
    let session = workspace
        .navigate(Route::Tool(ToolKind::PhoneComparison))
        .expect("tool routes open a session");

    let request = wire_request(json!({
        "tool": "phone-comparison",
        "form": { "model1": "Galaxy S24", "model2": "Galaxy S2" }
    }));
    session.run(&service, request).await.expect("form is valid");

    match session.state() {
        SessionState::Failed { message } => {
            assert_eq!(*message, ToolKind::PhoneComparison.retry_message())
        }
        other => panic!("expected failure, got {}", other.name()),
    }
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn invalid_forms_never_reach_the_service() {
    let (service, sink) = common::service();
    let mut workspace = Workspace::default();
    let session = workspace
        .navigate(Route::Tool(ToolKind::PhoneComparison))
        .expect("tool routes open a session");

    let request = wire_request(json!({
        "tool": "phone-comparison",
        "form": { "model1": "Galaxy S24", "model2": "Galaxy S24" }
    }));
    let error = session
        .run(&service, request)
        .await
        .expect_err("identical models are rejected");

    assert_eq!(error, ValidationError::IdenticalModels);
    assert!(matches!(session.state(), SessionState::Rejected(_)));
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn navigating_away_discards_the_in_flight_run() {
    let (service, sink) = common::service();
    let mut workspace = Workspace::default();
    let pending = workspace
        .navigate(Route::Tool(ToolKind::TradeIn))
        .expect("tool routes open a session")
        .begin(wire_request(json!({
            "tool": "trade-in",
            "form": { "model": "Galaxy S24", "condition": "excellent", "storage": "256GB" }
        })))
        .expect("form is valid");

    workspace.navigate(Route::Home);
    assert!(workspace.session().is_none());

    let session = workspace
        .navigate(Route::Tool(ToolKind::TradeIn))
        .expect("tool routes open a session");
    let result = service.compute(pending.token, pending.request).await;
    assert!(result.is_ok());

    assert_eq!(session.complete(pending.token, result), Completion::Stale);
    assert!(matches!(session.state(), SessionState::Idle));
    assert_eq!(sink.events().len(), 1);
}

#[tokio::test]
async fn update_tracker_filters_by_type_through_a_session() {
    let (service, _) = common::service();
    let mut workspace = Workspace::default();
    let session = workspace
        .navigate(Route::Tool(ToolKind::UpdateTracker))
        .expect("tool routes open a session");

    let request = wire_request(json!({
        "tool": "update-tracker",
        "form": { "type": "security" }
    }));
    session.run(&service, request).await.expect("queries always validate");

    let issued = session.state().result().expect("listing is displayed");
    match &issued.result {
        ToolOutcome::UpdateTracker(listing) => {
            assert_eq!(listing.updates.len(), 4);
            assert_eq!(listing.stats.total, 10);
            assert!(listing
                .updates
                .windows(2)
                .all(|pair| pair[0].release_date >= pair[1].release_date));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn upgrade_advice_skips_the_current_model() {
    let (service, _) = common::service();
    let request = wire_request(json!({
        "tool": "upgrade-advisor",
        "form": {
            "current_model": "Galaxy S24 Ultra",
            "priorities": ["camera", "performance"],
            "budget": "no-limit",
            "timeframe": "immediate"
        }
    }));

    let issued = service.submit(request).await.expect("advice is produced");
    match issued.result {
        ToolOutcome::UpgradeAdvisor(advice) => {
            assert_ne!(advice.top_recommendation.model, "Galaxy S24 Ultra");
            assert!(advice
                .alternatives
                .iter()
                .all(|alt| alt.model != "Galaxy S24 Ultra"));
            assert!(advice
                .alternatives
                .iter()
                .all(|alt| alt.score <= advice.top_recommendation.score));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
