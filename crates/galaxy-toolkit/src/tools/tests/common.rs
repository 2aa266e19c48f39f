use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::notifications::{Notification, NotificationError, NotificationSink};
use crate::tools::battery::{BatteryForm, ChargingHabit, HeatExposure, UsagePattern};
use crate::tools::trade_in::{DeviceCondition, StorageTier, TradeInForm};
use crate::tools::{tool_router, SimulatedLatency, ToolService};

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationSink for MemoryNotifications {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifications;

impl NotificationSink for OfflineNotifications {
    fn notify(&self, _notification: Notification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("toast channel closed".to_string()))
    }
}

pub(super) fn build_service() -> (ToolService<MemoryNotifications>, Arc<MemoryNotifications>) {
    let notifications = Arc::new(MemoryNotifications::default());
    let service = ToolService::new(notifications.clone(), SimulatedLatency::Disabled);
    (service, notifications)
}

pub(super) fn router_with_service(service: ToolService<MemoryNotifications>) -> axum::Router {
    tool_router(Arc::new(service))
}

pub(super) fn trade_in_form() -> TradeInForm {
    TradeInForm {
        model: Some("Galaxy S24".to_string()),
        condition: Some(DeviceCondition::Good),
        storage: Some(StorageTier::Gb128),
    }
}

pub(super) fn battery_form() -> BatteryForm {
    BatteryForm {
        model: Some("Galaxy S23".to_string()),
        phone_age: Some(24),
        usage_pattern: Some(UsagePattern::Gaming),
        charging_habits: Some(ChargingHabit::Depleted),
        heat_exposure: Some(HeatExposure::High),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
