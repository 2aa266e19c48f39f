//! The seven device calculators and the plumbing shared between them.
//!
//! Each tool module follows the same shape: a loosely-typed form as submitted
//! by a caller, a `validate` step producing a typed input, and a pure scoring
//! function over the static catalog. [`ToolRequest`] and [`ToolOutcome`] wrap
//! the per-tool types so the dispatcher, session and router can treat every
//! tool uniformly.

pub mod battery;
pub mod comparison;
pub mod customization;
pub mod dispatch;
pub mod firmware;
pub mod router;
pub mod trade_in;
pub mod updates;
pub mod upgrade;
pub mod validation;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub use dispatch::{SimulatedLatency, ToolService};
pub use router::tool_router;
pub use validation::ValidationError;

use crate::notifications::NotificationError;

/// Request-scoped identifier. Display-only, never a stable entity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(pub u64);

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl RequestToken {
    pub fn next() -> Self {
        Self(REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }
}

/// A tool result stamped with the request that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Issued<T> {
    pub id: RequestToken,
    #[serde(flatten)]
    pub result: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> Issued<T> {
    pub fn new(id: RequestToken, result: T) -> Self {
        Self {
            id,
            result,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    TradeIn,
    BatteryHealth,
    PhoneComparison,
    UpgradeAdvisor,
    FirmwareChecker,
    CustomizationGenerator,
    UpdateTracker,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::TradeIn,
        ToolKind::BatteryHealth,
        ToolKind::PhoneComparison,
        ToolKind::UpgradeAdvisor,
        ToolKind::FirmwareChecker,
        ToolKind::CustomizationGenerator,
        ToolKind::UpdateTracker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::TradeIn => "Trade-In Value Estimator",
            ToolKind::BatteryHealth => "Battery Health Checker",
            ToolKind::PhoneComparison => "Phone Comparison Tool",
            ToolKind::UpgradeAdvisor => "Upgrade Advisor",
            ToolKind::FirmwareChecker => "Firmware Compatibility Checker",
            ToolKind::CustomizationGenerator => "One UI Customization Generator",
            ToolKind::UpdateTracker => "Update Tracker",
        }
    }

    /// Artificial latency applied when simulated latency is enabled.
    pub fn simulated_latency(&self) -> Duration {
        let millis = match self {
            ToolKind::TradeIn | ToolKind::PhoneComparison | ToolKind::FirmwareChecker => 400,
            ToolKind::BatteryHealth
            | ToolKind::UpgradeAdvisor
            | ToolKind::CustomizationGenerator => 500,
            ToolKind::UpdateTracker => 300,
        };
        Duration::from_millis(millis)
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ToolKind::TradeIn => "Trade-in value estimated successfully!",
            ToolKind::BatteryHealth => "Battery health analyzed successfully!",
            ToolKind::PhoneComparison => "Phone comparison completed!",
            ToolKind::UpgradeAdvisor => "Upgrade advice generated!",
            ToolKind::FirmwareChecker => "Firmware compatibility checked!",
            ToolKind::CustomizationGenerator => "Customization config generated!",
            ToolKind::UpdateTracker => "Updates refreshed!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ToolKind::TradeIn => "Calculation failed",
            ToolKind::BatteryHealth | ToolKind::UpgradeAdvisor => "Analysis failed",
            ToolKind::PhoneComparison => "Comparison failed",
            ToolKind::FirmwareChecker => "Check failed",
            ToolKind::CustomizationGenerator => "Generation failed",
            ToolKind::UpdateTracker => "Failed to load updates",
        }
    }

    /// Inline message shown in place of a result after a failed computation.
    pub fn retry_message(&self) -> &'static str {
        match self {
            ToolKind::TradeIn => "Failed to calculate trade-in value. Please try again.",
            ToolKind::BatteryHealth => "Failed to analyze battery health. Please try again.",
            ToolKind::PhoneComparison => "Failed to compare phones. Please try again.",
            ToolKind::UpgradeAdvisor => "Failed to generate upgrade advice. Please try again.",
            ToolKind::FirmwareChecker => {
                "Failed to check firmware compatibility. Please try again."
            }
            ToolKind::CustomizationGenerator => {
                "Failed to generate customization config. Please try again."
            }
            ToolKind::UpdateTracker => "Failed to load updates. Please try again.",
        }
    }
}

/// A form submission addressed to one tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "tool", content = "form", rename_all = "kebab-case")]
pub enum ToolRequest {
    TradeIn(trade_in::TradeInForm),
    BatteryHealth(battery::BatteryForm),
    PhoneComparison(comparison::ComparisonForm),
    UpgradeAdvisor(upgrade::UpgradeForm),
    FirmwareChecker(firmware::FirmwareForm),
    CustomizationGenerator(customization::CustomizationForm),
    UpdateTracker(updates::UpdateQuery),
}

impl ToolRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::TradeIn(_) => ToolKind::TradeIn,
            ToolRequest::BatteryHealth(_) => ToolKind::BatteryHealth,
            ToolRequest::PhoneComparison(_) => ToolKind::PhoneComparison,
            ToolRequest::UpgradeAdvisor(_) => ToolKind::UpgradeAdvisor,
            ToolRequest::FirmwareChecker(_) => ToolKind::FirmwareChecker,
            ToolRequest::CustomizationGenerator(_) => ToolKind::CustomizationGenerator,
            ToolRequest::UpdateTracker(_) => ToolKind::UpdateTracker,
        }
    }

    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        Ok(match self {
            ToolRequest::TradeIn(form) => ValidatedRequest::TradeIn(form.validate()?),
            ToolRequest::BatteryHealth(form) => ValidatedRequest::BatteryHealth(form.validate()?),
            ToolRequest::PhoneComparison(form) => {
                ValidatedRequest::PhoneComparison(form.validate()?)
            }
            ToolRequest::UpgradeAdvisor(form) => ValidatedRequest::UpgradeAdvisor(form.validate()?),
            ToolRequest::FirmwareChecker(form) => {
                ValidatedRequest::FirmwareChecker(form.validate()?)
            }
            ToolRequest::CustomizationGenerator(form) => {
                ValidatedRequest::CustomizationGenerator(form.validate()?)
            }
            ToolRequest::UpdateTracker(query) => ValidatedRequest::UpdateTracker(query.normalize()),
        })
    }
}

/// A request whose form passed validation and is ready to score.
#[derive(Debug, Clone)]
pub enum ValidatedRequest {
    TradeIn(trade_in::TradeInInput),
    BatteryHealth(battery::BatteryInput),
    PhoneComparison(comparison::ComparisonInput),
    UpgradeAdvisor(upgrade::UpgradeInput),
    FirmwareChecker(firmware::FirmwareInput),
    CustomizationGenerator(customization::CustomizationInput),
    UpdateTracker(updates::UpdateQuery),
}

impl ValidatedRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ValidatedRequest::TradeIn(_) => ToolKind::TradeIn,
            ValidatedRequest::BatteryHealth(_) => ToolKind::BatteryHealth,
            ValidatedRequest::PhoneComparison(_) => ToolKind::PhoneComparison,
            ValidatedRequest::UpgradeAdvisor(_) => ToolKind::UpgradeAdvisor,
            ValidatedRequest::FirmwareChecker(_) => ToolKind::FirmwareChecker,
            ValidatedRequest::CustomizationGenerator(_) => ToolKind::CustomizationGenerator,
            ValidatedRequest::UpdateTracker(_) => ToolKind::UpdateTracker,
        }
    }

    /// Run the scoring function for this request against the static catalog.
    pub fn evaluate(&self) -> Result<ToolOutcome, ToolError> {
        Ok(match self {
            ValidatedRequest::TradeIn(input) => ToolOutcome::TradeIn(trade_in::estimate(input)),
            ValidatedRequest::BatteryHealth(input) => {
                ToolOutcome::BatteryHealth(battery::check_health(input))
            }
            ValidatedRequest::PhoneComparison(input) => {
                ToolOutcome::PhoneComparison(comparison::compare(input)?)
            }
            ValidatedRequest::UpgradeAdvisor(input) => {
                ToolOutcome::UpgradeAdvisor(upgrade::advise(input)?)
            }
            ValidatedRequest::FirmwareChecker(input) => {
                ToolOutcome::FirmwareChecker(firmware::check_compatibility(input))
            }
            ValidatedRequest::CustomizationGenerator(input) => {
                ToolOutcome::CustomizationGenerator(customization::generate_config(input))
            }
            ValidatedRequest::UpdateTracker(query) => {
                ToolOutcome::UpdateTracker(updates::UpdateFeed::standard().filter(query))
            }
        })
    }
}

/// Result of one tool run. Serializes as the bare per-tool result.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    TradeIn(trade_in::TradeInEstimate),
    BatteryHealth(battery::BatteryHealthResult),
    PhoneComparison(comparison::ComparisonResult),
    UpgradeAdvisor(upgrade::UpgradeAdvice),
    FirmwareChecker(firmware::FirmwareCompatibility),
    CustomizationGenerator(customization::CustomizationConfig),
    UpdateTracker(updates::UpdateListing),
}

impl ToolOutcome {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolOutcome::TradeIn(_) => ToolKind::TradeIn,
            ToolOutcome::BatteryHealth(_) => ToolKind::BatteryHealth,
            ToolOutcome::PhoneComparison(_) => ToolKind::PhoneComparison,
            ToolOutcome::UpgradeAdvisor(_) => ToolKind::UpgradeAdvisor,
            ToolOutcome::FirmwareChecker(_) => ToolKind::FirmwareChecker,
            ToolOutcome::CustomizationGenerator(_) => ToolKind::CustomizationGenerator,
            ToolOutcome::UpdateTracker(_) => ToolKind::UpdateTracker,
        }
    }
}

/// Error raised while running a tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("phone model not found: {0}")]
    ModelNotFound(String),
    #[error("update not found: {0}")]
    UpdateNotFound(u32),
    #[error("no upgrade candidates remain after excluding {0}")]
    NoCandidates(String),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl ToolError {
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ToolError::ModelNotFound(_) | ToolError::UpdateNotFound(_) | ToolError::NoCandidates(_)
        )
    }
}
