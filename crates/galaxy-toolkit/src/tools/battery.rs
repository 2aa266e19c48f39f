use super::validation::{required, required_text, ValidationError};
use serde::{Deserialize, Serialize};

pub const MIN_HEALTH_SCORE: i32 = 20;
pub const MAX_HEALTH_SCORE: i32 = 100;

const MAX_AGE_PENALTY: u32 = 40;
const MAX_RECOMMENDATIONS: usize = 4;
const MAX_CONDITIONAL_RECOMMENDATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsagePattern {
    Light,
    Moderate,
    Heavy,
    Gaming,
}

impl UsagePattern {
    pub const ALL: [UsagePattern; 4] = [
        UsagePattern::Light,
        UsagePattern::Moderate,
        UsagePattern::Heavy,
        UsagePattern::Gaming,
    ];

    /// Usage multiplier × 10, i.e. the points deducted.
    fn penalty(&self) -> i32 {
        match self {
            UsagePattern::Light => 5,
            UsagePattern::Moderate => 10,
            UsagePattern::Heavy => 15,
            UsagePattern::Gaming => 20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsagePattern::Light => "Light (1-3 hours/day)",
            UsagePattern::Moderate => "Moderate (3-6 hours/day)",
            UsagePattern::Heavy => "Heavy (6+ hours/day)",
            UsagePattern::Gaming => "Gaming/Intensive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargingHabit {
    Overnight,
    Frequent,
    Depleted,
    Wireless,
}

impl ChargingHabit {
    pub const ALL: [ChargingHabit; 4] = [
        ChargingHabit::Overnight,
        ChargingHabit::Frequent,
        ChargingHabit::Depleted,
        ChargingHabit::Wireless,
    ];

    fn penalty(&self) -> i32 {
        match self {
            ChargingHabit::Overnight => 5,
            ChargingHabit::Frequent => 3,
            ChargingHabit::Depleted => 8,
            ChargingHabit::Wireless => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargingHabit::Overnight => "Overnight charging",
            ChargingHabit::Frequent => "Frequent top-ups",
            ChargingHabit::Depleted => "Charge when depleted",
            ChargingHabit::Wireless => "Mainly wireless charging",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatExposure {
    Low,
    Moderate,
    High,
}

impl HeatExposure {
    pub const ALL: [HeatExposure; 3] = [HeatExposure::Low, HeatExposure::Moderate, HeatExposure::High];

    fn penalty(&self) -> i32 {
        match self {
            HeatExposure::Low => 2,
            HeatExposure::Moderate => 5,
            HeatExposure::High => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeatExposure::Low => "Low (Cool environments)",
            HeatExposure::Moderate => "Moderate (Normal use)",
            HeatExposure::High => "High (Gaming, hot climates)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            HealthStatus::Excellent
        } else if score >= 60 {
            HealthStatus::Good
        } else if score >= 40 {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
        }
    }

    /// Badge variant used when rendering the status.
    pub fn badge(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "success",
            HealthStatus::Good => "info",
            HealthStatus::Fair => "warning",
            HealthStatus::Poor => "error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryForm {
    #[serde(default)]
    pub model: Option<String>,
    /// Device age in months.
    #[serde(default)]
    pub phone_age: Option<u32>,
    #[serde(default)]
    pub usage_pattern: Option<UsagePattern>,
    #[serde(default)]
    pub charging_habits: Option<ChargingHabit>,
    #[serde(default)]
    pub heat_exposure: Option<HeatExposure>,
}

impl BatteryForm {
    pub fn validate(self) -> Result<BatteryInput, ValidationError> {
        Ok(BatteryInput {
            model: required_text("model", self.model)?,
            phone_age: required("phone_age", self.phone_age)?,
            usage_pattern: required("usage_pattern", self.usage_pattern)?,
            charging_habits: required("charging_habits", self.charging_habits)?,
            heat_exposure: required("heat_exposure", self.heat_exposure)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryInput {
    pub model: String,
    pub phone_age: u32,
    pub usage_pattern: UsagePattern,
    pub charging_habits: ChargingHabit,
    pub heat_exposure: HeatExposure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatteryHealthResult {
    pub model: String,
    pub phone_age: u32,
    pub usage_pattern: UsagePattern,
    pub charging_habits: ChargingHabit,
    pub heat_exposure: HeatExposure,
    pub health_score: i32,
    pub status: HealthStatus,
    pub recommendations: Vec<&'static str>,
}

pub fn check_health(input: &BatteryInput) -> BatteryHealthResult {
    let health_score = health_score(
        input.phone_age,
        input.usage_pattern,
        input.charging_habits,
        input.heat_exposure,
    );

    BatteryHealthResult {
        model: input.model.clone(),
        phone_age: input.phone_age,
        usage_pattern: input.usage_pattern,
        charging_habits: input.charging_habits,
        heat_exposure: input.heat_exposure,
        health_score,
        status: HealthStatus::from_score(health_score),
        recommendations: recommendations(health_score, input),
    }
}

/// Health estimate in `[20, 100]`.
pub fn health_score(
    phone_age: u32,
    usage: UsagePattern,
    charging: ChargingHabit,
    heat: HeatExposure,
) -> i32 {
    let age_penalty = phone_age.saturating_mul(2).min(MAX_AGE_PENALTY) as i32;
    let score = 100 - age_penalty - usage.penalty() - charging.penalty() - heat.penalty();
    score.clamp(MIN_HEALTH_SCORE, MAX_HEALTH_SCORE)
}

fn recommendations(score: i32, input: &BatteryInput) -> Vec<&'static str> {
    let mut conditional = Vec::new();

    if score < 60 {
        conditional.push("Consider replacing your battery at an authorized Samsung service center");
    }
    match input.charging_habits {
        ChargingHabit::Overnight => {
            conditional.push("Avoid overnight charging to extend battery lifespan")
        }
        ChargingHabit::Depleted => {
            conditional.push("Try to keep battery level between 20-80% for optimal health")
        }
        ChargingHabit::Frequent | ChargingHabit::Wireless => {}
    }
    if input.heat_exposure == HeatExposure::High {
        conditional.push("Reduce gaming sessions and avoid direct sunlight exposure");
    }
    if input.usage_pattern == UsagePattern::Gaming {
        conditional.push("Enable battery saving mode during intensive gaming sessions");
    }
    conditional.truncate(MAX_CONDITIONAL_RECOMMENDATIONS);

    let mut recommendations = conditional;
    recommendations.push("Use adaptive battery settings in device care");
    recommendations.push("Enable battery protection in Samsung Members app");
    recommendations.push("Consider using original Samsung charger for optimal charging");
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
