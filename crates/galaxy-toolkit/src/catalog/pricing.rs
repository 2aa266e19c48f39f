use serde::Serialize;

/// Trade-in value used when a model has no tabulated base value.
pub const DEFAULT_TRADE_IN_BASE: u32 = 300;

const TRADE_IN_BASE_VALUES: &[(&str, u32)] = &[
    ("Galaxy S24 Ultra", 850),
    ("Galaxy S24 Plus", 650),
    ("Galaxy S24", 550),
    ("Galaxy S23 Ultra", 750),
    ("Galaxy S23 Plus", 550),
    ("Galaxy S23", 450),
    ("Galaxy Note 20 Ultra", 500),
    ("Galaxy Note 20", 400),
    ("Galaxy A54", 250),
    ("Galaxy A34", 180),
    ("Galaxy Z Fold 5", 900),
    ("Galaxy Z Flip 5", 450),
];

/// Base trade-in value in whole dollars for a model name.
pub fn trade_in_base_value(model: &str) -> u32 {
    TRADE_IN_BASE_VALUES
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, value)| *value)
        .unwrap_or(DEFAULT_TRADE_IN_BASE)
}

/// A device the upgrade advisor can recommend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeCandidate {
    pub model: &'static str,
    pub price_usd: u32,
    pub release_year: u16,
    pub strengths: &'static [&'static str],
    pub base_score: u8,
}

impl UpgradeCandidate {
    pub fn price_label(&self) -> String {
        let dollars = self.price_usd;
        if dollars >= 1000 {
            format!("${},{:03}", dollars / 1000, dollars % 1000)
        } else {
            format!("${dollars}")
        }
    }

    pub fn is_ultra(&self) -> bool {
        self.model.contains("Ultra")
    }

    pub fn is_plus(&self) -> bool {
        self.model.contains("Plus")
    }
}

pub fn upgrade_candidates() -> &'static [UpgradeCandidate] {
    UPGRADE_CANDIDATES
}

const UPGRADE_CANDIDATES: &[UpgradeCandidate] = &[
    UpgradeCandidate {
        model: "Galaxy S24 Ultra",
        price_usd: 1299,
        release_year: 2024,
        strengths: &["Best camera system", "S Pen included", "Premium build"],
        base_score: 95,
    },
    UpgradeCandidate {
        model: "Galaxy S24 Plus",
        price_usd: 999,
        release_year: 2024,
        strengths: &["Large display", "Great performance", "Good value"],
        base_score: 88,
    },
    UpgradeCandidate {
        model: "Galaxy S24",
        price_usd: 799,
        release_year: 2024,
        strengths: &["Compact size", "Latest features", "Affordable"],
        base_score: 85,
    },
    UpgradeCandidate {
        model: "Galaxy Z Fold 5",
        price_usd: 1799,
        release_year: 2023,
        strengths: &["Foldable display", "Multitasking", "Unique form factor"],
        base_score: 82,
    },
    UpgradeCandidate {
        model: "Galaxy Z Flip 5",
        price_usd: 999,
        release_year: 2023,
        strengths: &["Compact foldable", "Stylish design", "Improved hinge"],
        base_score: 78,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_models_fall_back_to_default_base() {
        assert_eq!(trade_in_base_value("Galaxy S24"), 550);
        assert_eq!(trade_in_base_value("Galaxy S7 Edge"), DEFAULT_TRADE_IN_BASE);
    }

    #[test]
    fn price_label_groups_thousands() {
        let candidates = upgrade_candidates();
        assert_eq!(candidates[0].price_label(), "$1,299");
        assert_eq!(candidates[2].price_label(), "$799");
    }
}
