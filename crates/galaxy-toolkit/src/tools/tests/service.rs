use super::common::*;
use crate::notifications::NotificationKind;
use crate::tools::comparison::ComparisonForm;
use crate::tools::upgrade::{Budget, Priority, Timeframe, UpgradeForm};
use crate::tools::{
    RequestToken, SimulatedLatency, ToolError, ToolKind, ToolOutcome, ToolRequest, ToolService,
    ValidationError,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn submit_scores_and_notifies_success() {
    let (service, notifications) = build_service();

    let issued = service
        .submit(ToolRequest::TradeIn(trade_in_form()))
        .await
        .expect("trade-in succeeds");

    match &issued.result {
        ToolOutcome::TradeIn(estimate) => assert_eq!(estimate.estimated_value, 440),
        other => panic!("expected trade-in estimate, got {other:?}"),
    }
    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Success);
    assert_eq!(events[0].message, "Trade-in value estimated successfully!");
}

#[tokio::test]
async fn rejected_forms_are_silent() {
    let (service, notifications) = build_service();
    let mut form = battery_form();
    form.model = None;

    match service.submit(ToolRequest::BatteryHealth(form)).await {
        Err(ToolError::Validation(ValidationError::MissingField("model"))) => {}
        other => panic!("expected missing model, got {other:?}"),
    }
    assert!(notifications.events().is_empty());
}

#[tokio::test]
async fn lookup_failures_notify_an_error() {
    let (service, notifications) = build_service();
    let request = ToolRequest::PhoneComparison(ComparisonForm {
        model1: Some("Galaxy S24".to_string()),
        model2: Some("Galaxy S10".to_string()),
    });

    let error = service.submit(request).await.expect_err("unknown model");
    assert!(error.is_lookup_failure());
    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Error);
    assert_eq!(events[0].message, "Comparison failed");
}

#[tokio::test]
async fn request_tokens_increase_per_submission() {
    let (service, _) = build_service();
    let first = service
        .submit(ToolRequest::TradeIn(trade_in_form()))
        .await
        .expect("first");
    let second = service
        .submit(ToolRequest::BatteryHealth(battery_form()))
        .await
        .expect("second");
    assert!(second.id > first.id);
    assert_ne!(first.id, RequestToken(0));
}

#[tokio::test]
async fn notification_transport_failures_surface() {
    let service = ToolService::new(Arc::new(OfflineNotifications), SimulatedLatency::Disabled);
    match service.submit(ToolRequest::TradeIn(trade_in_form())).await {
        Err(ToolError::Notification(_)) => {}
        other => panic!("expected notification failure, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_latency_waits_per_tool() {
    let notifications = Arc::new(MemoryNotifications::default());
    let service = ToolService::new(notifications, SimulatedLatency::PerTool);

    let started = tokio::time::Instant::now();
    let request = ToolRequest::UpgradeAdvisor(UpgradeForm {
        current_model: Some("Galaxy S23".to_string()),
        priorities: vec![Priority::Camera],
        budget: Some(Budget::NoLimit),
        timeframe: Some(Timeframe::Immediate),
    });
    service.submit(request).await.expect("advice");
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(
        SimulatedLatency::PerTool.delay_for(ToolKind::UpdateTracker),
        Some(Duration::from_millis(300))
    );
    assert_eq!(SimulatedLatency::Disabled.delay_for(ToolKind::TradeIn), None);
}

#[test]
fn check_update_emits_an_info_reminder() {
    let (service, notifications) = build_service();
    let update = service.check_update(1).expect("seeded update");
    assert_eq!(update.model, "Galaxy S24 Ultra");
    assert_eq!(notifications.events()[0].kind, NotificationKind::Info);

    match service.check_update(404) {
        Err(ToolError::UpdateNotFound(404)) => {}
        other => panic!("expected missing update, got {other:?}"),
    }
    assert_eq!(notifications.events().len(), 1);
}
