use super::validation::{required, required_text, ValidationError};
use super::ToolError;
use crate::catalog::pricing::{upgrade_candidates, UpgradeCandidate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const MAX_ALTERNATIVES: usize = 3;
const MAX_TIPS: usize = 4;
const OUT_OF_BUDGET_PENALTY: i32 = 15;
const AFFORDABLE_PRICE_USD: u32 = 800;
const CURRENT_GENERATION: u16 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Camera,
    Performance,
    Battery,
    Display,
    Storage,
    Price,
}

impl Priority {
    pub const ALL: [Priority; 6] = [
        Priority::Camera,
        Priority::Performance,
        Priority::Battery,
        Priority::Display,
        Priority::Storage,
        Priority::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Camera => "camera",
            Priority::Performance => "performance",
            Priority::Battery => "battery",
            Priority::Display => "display",
            Priority::Storage => "storage",
            Priority::Price => "price",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Camera => "Camera",
            Priority::Performance => "Performance",
            Priority::Battery => "Battery",
            Priority::Display => "Display",
            Priority::Storage => "Storage",
            Priority::Price => "Price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Camera => "Camera Quality",
            Priority::Performance => "Performance",
            Priority::Battery => "Battery Life",
            Priority::Display => "Display Quality",
            Priority::Storage => "Storage Space",
            Priority::Price => "Price/Value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under-500")]
    Under500,
    #[serde(rename = "500-800")]
    From500To800,
    #[serde(rename = "800-1200")]
    From800To1200,
    #[serde(rename = "over-1200")]
    Over1200,
    #[serde(rename = "no-limit")]
    NoLimit,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Under500,
        Budget::From500To800,
        Budget::From800To1200,
        Budget::Over1200,
        Budget::NoLimit,
    ];

    /// Accepted price range in whole dollars, bounds inclusive.
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            Budget::Under500 => 0..=500,
            Budget::From500To800 => 500..=800,
            Budget::From800To1200 => 800..=1200,
            Budget::Over1200 => 1200..=9999,
            Budget::NoLimit => 0..=9999,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Under500 => "Under $500",
            Budget::From500To800 => "$500 - $800",
            Budget::From800To1200 => "$800 - $1,200",
            Budget::Over1200 => "Over $1,200",
            Budget::NoLimit => "No Budget Limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "1-year")]
    OneYear,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Immediate,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Immediate => "Immediate (Now)",
            Timeframe::ThreeMonths => "Within 3 months",
            Timeframe::SixMonths => "Within 6 months",
            Timeframe::OneYear => "Within 1 year",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeForm {
    #[serde(default)]
    pub current_model: Option<String>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
}

impl UpgradeForm {
    pub fn validate(self) -> Result<UpgradeInput, ValidationError> {
        let current_model = required_text("current_model", self.current_model)?;
        if self.priorities.is_empty() {
            return Err(ValidationError::EmptySelection("priority"));
        }
        let budget = required("budget", self.budget)?;
        let timeframe = required("timeframe", self.timeframe)?;

        let mut priorities = Vec::with_capacity(self.priorities.len());
        for priority in self.priorities {
            if !priorities.contains(&priority) {
                priorities.push(priority);
            }
        }

        Ok(UpgradeInput {
            current_model,
            priorities,
            budget,
            timeframe,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeInput {
    pub current_model: String,
    /// Selected priorities in submission order, without duplicates.
    pub priorities: Vec<Priority>,
    pub budget: Budget,
    pub timeframe: Timeframe,
}

impl UpgradeInput {
    fn wants(&self, priority: Priority) -> bool {
        self.priorities.contains(&priority)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub model: &'static str,
    pub price: String,
    pub price_usd: u32,
    pub release_year: u16,
    pub strengths: &'static [&'static str],
    pub score: u8,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeAdvice {
    pub current_model: String,
    pub priorities: Vec<&'static str>,
    pub budget: &'static str,
    pub timeframe: &'static str,
    pub top_recommendation: Recommendation,
    pub alternatives: Vec<Recommendation>,
    pub tips: Vec<&'static str>,
}

pub fn advise(input: &UpgradeInput) -> Result<UpgradeAdvice, ToolError> {
    let mut ranked: Vec<(&'static UpgradeCandidate, u8)> = upgrade_candidates()
        .iter()
        .filter(|candidate| candidate.model != input.current_model)
        .map(|candidate| (candidate, score(candidate, input)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ranked = ranked.into_iter();
    let Some((top, top_score)) = ranked.next() else {
        tracing::debug!(model = %input.current_model, "no upgrade candidates left");
        return Err(ToolError::NoCandidates(input.current_model.clone()));
    };

    let priority_list = input
        .priorities
        .iter()
        .map(|priority| priority.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let top_recommendation = recommendation(
        top,
        top_score,
        format!("Best match for your {priority_list} priorities"),
    );
    let alternatives = ranked
        .take(MAX_ALTERNATIVES)
        .map(|(candidate, score)| {
            recommendation(
                candidate,
                score,
                format!("Strong alternative with {}", candidate.strengths.join(", ")),
            )
        })
        .collect();

    Ok(UpgradeAdvice {
        current_model: input.current_model.clone(),
        priorities: input.priorities.iter().map(|priority| priority.name()).collect(),
        budget: input.budget.label(),
        timeframe: input.timeframe.label(),
        top_recommendation,
        alternatives,
        tips: tips(input),
    })
}

/// Candidate score adjusted for priorities and budget, clamped to `[0, 100]`.
pub fn score(candidate: &UpgradeCandidate, input: &UpgradeInput) -> u8 {
    let mut score = i32::from(candidate.base_score);
    if input.wants(Priority::Camera) && candidate.is_ultra() {
        score += 5;
    }
    if input.wants(Priority::Price) && candidate.price_usd < AFFORDABLE_PRICE_USD {
        score += 8;
    }
    if input.wants(Priority::Performance) && candidate.release_year == CURRENT_GENERATION {
        score += 3;
    }
    if input.wants(Priority::Battery) && candidate.is_plus() {
        score += 4;
    }
    if !input.budget.range().contains(&candidate.price_usd) {
        score -= OUT_OF_BUDGET_PENALTY;
    }
    u8::try_from(score.clamp(0, 100)).unwrap_or(0)
}

fn recommendation(candidate: &'static UpgradeCandidate, score: u8, reason: String) -> Recommendation {
    Recommendation {
        model: candidate.model,
        price: candidate.price_label(),
        price_usd: candidate.price_usd,
        release_year: candidate.release_year,
        strengths: candidate.strengths,
        score,
        reason,
    }
}

fn tips(input: &UpgradeInput) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if input.wants(Priority::Camera) {
        tips.push("Consider the Ultra models for the best camera experience");
    }
    if input.wants(Priority::Price) {
        tips.push("Look for trade-in deals to reduce upgrade costs");
    }
    if input.timeframe == Timeframe::Immediate {
        tips.push("Check for current promotions and discounts");
    }
    tips.extend([
        "Wait for seasonal sales like Black Friday for better deals",
        "Consider certified pre-owned devices for savings",
        "Compare carrier deals vs unlocked pricing",
    ]);
    tips.truncate(MAX_TIPS);
    tips
}
