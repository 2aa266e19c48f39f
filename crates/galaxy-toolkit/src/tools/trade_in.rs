use super::validation::{required, required_text, ValidationError};
use crate::catalog::pricing::trade_in_base_value;
use serde::{Deserialize, Serialize};

const MAX_TIPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DeviceCondition {
    pub const ALL: [DeviceCondition; 4] = [
        DeviceCondition::Excellent,
        DeviceCondition::Good,
        DeviceCondition::Fair,
        DeviceCondition::Poor,
    ];

    /// Value multiplier expressed in percent.
    pub fn multiplier_pct(&self) -> u32 {
        match self {
            DeviceCondition::Excellent => 100,
            DeviceCondition::Good => 80,
            DeviceCondition::Fair => 60,
            DeviceCondition::Poor => 40,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceCondition::Excellent => "Excellent",
            DeviceCondition::Good => "Good",
            DeviceCondition::Fair => "Fair",
            DeviceCondition::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageTier {
    #[serde(rename = "64GB")]
    Gb64,
    #[serde(rename = "128GB")]
    Gb128,
    #[serde(rename = "256GB")]
    Gb256,
    #[serde(rename = "512GB")]
    Gb512,
    #[serde(rename = "1TB")]
    Tb1,
}

impl StorageTier {
    pub const ALL: [StorageTier; 5] = [
        StorageTier::Gb64,
        StorageTier::Gb128,
        StorageTier::Gb256,
        StorageTier::Gb512,
        StorageTier::Tb1,
    ];

    /// Value multiplier expressed in percent.
    pub fn multiplier_pct(&self) -> u32 {
        match self {
            StorageTier::Gb64 => 90,
            StorageTier::Gb128 => 100,
            StorageTier::Gb256 => 110,
            StorageTier::Gb512 => 120,
            StorageTier::Tb1 => 130,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageTier::Gb64 => "64GB",
            StorageTier::Gb128 => "128GB",
            StorageTier::Gb256 => "256GB",
            StorageTier::Gb512 => "512GB",
            StorageTier::Tb1 => "1TB",
        }
    }

    pub fn is_high_capacity(&self) -> bool {
        matches!(self, StorageTier::Gb512 | StorageTier::Tb1)
    }
}

/// Trade-in form as submitted; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeInForm {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub condition: Option<DeviceCondition>,
    #[serde(default)]
    pub storage: Option<StorageTier>,
}

impl TradeInForm {
    pub fn validate(self) -> Result<TradeInInput, ValidationError> {
        Ok(TradeInInput {
            model: required_text("model", self.model)?,
            condition: required("condition", self.condition)?,
            storage: required("storage", self.storage)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeInInput {
    pub model: String,
    pub condition: DeviceCondition,
    pub storage: StorageTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeInEstimate {
    pub model: String,
    pub condition: DeviceCondition,
    pub storage: StorageTier,
    pub base_value: u32,
    pub estimated_value: u32,
    pub tips: Vec<&'static str>,
}

pub fn estimate(input: &TradeInInput) -> TradeInEstimate {
    let base_value = trade_in_base_value(&input.model);
    let estimated_value = scaled_value(
        base_value,
        input.condition.multiplier_pct(),
        input.storage.multiplier_pct(),
    );

    TradeInEstimate {
        model: input.model.clone(),
        condition: input.condition,
        storage: input.storage,
        base_value,
        estimated_value,
        tips: tips(input.condition, input.storage),
    }
}

/// `base × condition% × storage%`, rounded half up to whole dollars.
fn scaled_value(base: u32, condition_pct: u32, storage_pct: u32) -> u32 {
    let scaled = u64::from(base) * u64::from(condition_pct) * u64::from(storage_pct);
    let rounded = (scaled + 5_000) / 10_000;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

fn tips(condition: DeviceCondition, storage: StorageTier) -> Vec<&'static str> {
    let mut tips = Vec::with_capacity(MAX_TIPS + 3);

    match condition {
        DeviceCondition::Excellent => tips.push(
            "Your device is in excellent condition - consider selling privately for higher value",
        ),
        DeviceCondition::Poor => {
            tips.push("Consider getting a screen protector and case for your next device")
        }
        DeviceCondition::Good | DeviceCondition::Fair => {}
    }

    if storage.is_high_capacity() {
        tips.push("High storage capacity adds significant value to your trade-in");
    }

    tips.extend([
        "Clean your device thoroughly before trade-in inspection",
        "Include original charger and accessories when possible",
        "Check multiple retailers for the best trade-in offers",
        "Consider timing your trade-in with new phone launches for better deals",
    ]);
    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::phones::phone_models;

    fn input(model: &str, condition: DeviceCondition, storage: StorageTier) -> TradeInInput {
        TradeInInput {
            model: model.to_string(),
            condition,
            storage,
        }
    }

    #[test]
    fn galaxy_s24_in_good_condition_is_worth_440() {
        let estimate = estimate(&input(
            "Galaxy S24",
            DeviceCondition::Good,
            StorageTier::Gb128,
        ));
        assert_eq!(estimate.base_value, 550);
        assert_eq!(estimate.estimated_value, 440);
    }

    #[test]
    fn unknown_model_uses_default_base() {
        let estimate = estimate(&input(
            "Galaxy S10",
            DeviceCondition::Fair,
            StorageTier::Gb64,
        ));
        assert_eq!(estimate.base_value, 300);
        assert_eq!(estimate.estimated_value, 162);
    }

    #[test]
    fn value_matches_rounded_product_for_every_catalog_model() {
        for model in phone_models() {
            for condition in DeviceCondition::ALL {
                for storage in StorageTier::ALL {
                    let result = estimate(&input(model.name, condition, storage));
                    let expected = (f64::from(result.base_value)
                        * f64::from(condition.multiplier_pct())
                        / 100.0
                        * f64::from(storage.multiplier_pct())
                        / 100.0)
                        .round() as u32;
                    assert_eq!(
                        result.estimated_value, expected,
                        "{} {:?} {:?}",
                        model.name, condition, storage
                    );
                }
            }
        }
    }

    #[test]
    fn tips_are_capped_and_lead_with_conditionals() {
        let excellent = estimate(&input(
            "Galaxy Z Fold 5",
            DeviceCondition::Excellent,
            StorageTier::Tb1,
        ));
        assert_eq!(excellent.tips.len(), 4);
        assert!(excellent.tips[0].contains("selling privately"));
        assert!(excellent.tips[1].contains("High storage"));

        let fair = estimate(&input("Galaxy A34", DeviceCondition::Fair, StorageTier::Gb128));
        assert_eq!(fair.tips.len(), 4);
        assert!(fair.tips[0].starts_with("Clean your device"));
    }

    #[test]
    fn form_requires_every_field() {
        let form = TradeInForm {
            model: Some("Galaxy S24".to_string()),
            condition: Some(DeviceCondition::Good),
            storage: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("storage")));
    }
}
