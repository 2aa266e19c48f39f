use super::validation::{optional_text, required_text, ValidationError};
use crate::catalog::firmware as tables;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker of the legacy firmware family that cannot be downgraded from.
const NON_DOWNGRADABLE_MARKER: &str = "AXA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Standard update with minimal risk",
            RiskLevel::Medium => "Carrier-locked device may have delayed updates",
            RiskLevel::High => "Downgrading firmware may not be possible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Medium => "warning",
            RiskLevel::High => "error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmwareForm {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub csc: Option<String>,
    #[serde(default)]
    pub current_firmware: Option<String>,
}

impl FirmwareForm {
    pub fn validate(self) -> Result<FirmwareInput, ValidationError> {
        Ok(FirmwareInput {
            model: required_text("model", self.model)?,
            csc: required_text("csc", self.csc)?.to_ascii_uppercase(),
            current_firmware: optional_text(self.current_firmware),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareInput {
    pub model: String,
    /// Upper-cased CSC code.
    pub csc: String,
    pub current_firmware: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirmwareCompatibility {
    pub model: String,
    pub csc: String,
    pub region: &'static str,
    pub latest_firmware: String,
    pub android_version: &'static str,
    pub one_ui_version: &'static str,
    pub release_date: NaiveDate,
    pub risk_level: RiskLevel,
    pub risk_description: &'static str,
    pub bootloader_locked: bool,
    pub warnings: Vec<&'static str>,
}

pub fn check_compatibility(input: &FirmwareInput) -> FirmwareCompatibility {
    let csc = input.csc.as_str();
    let risk_level = assess_risk(csc, input.current_firmware.as_deref());

    let mut warnings = Vec::with_capacity(4);
    if risk_level == RiskLevel::High {
        warnings.push("This update may prevent downgrading to previous firmware");
    }
    if tables::has_delayed_carrier_updates(csc) {
        warnings.push("Carrier updates may be delayed by 1-2 weeks");
    }
    warnings.push("Always backup your data before updating");
    warnings.push("Ensure stable internet connection during update");

    FirmwareCompatibility {
        model: input.model.clone(),
        csc: input.csc.clone(),
        region: tables::region_for_csc(csc),
        latest_firmware: format!("{}BXXU4CXL2", tables::firmware_prefix(&input.model)),
        android_version: tables::android_version(&input.model),
        one_ui_version: tables::one_ui_version(&input.model),
        release_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        risk_level,
        risk_description: risk_level.description(),
        bootloader_locked: csc != tables::US_UNLOCKED_CSC,
        warnings,
    }
}

pub fn assess_risk(csc: &str, current_firmware: Option<&str>) -> RiskLevel {
    if current_firmware.is_some_and(|firmware| firmware.contains(NON_DOWNGRADABLE_MARKER)) {
        RiskLevel::High
    } else if tables::is_us_carrier_csc(csc) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(model: &str, csc: &str, current: Option<&str>) -> FirmwareInput {
        FirmwareInput {
            model: model.to_string(),
            csc: csc.to_string(),
            current_firmware: current.map(str::to_string),
        }
    }

    #[test]
    fn unlocked_s24_is_low_risk() {
        let result = check_compatibility(&input("Galaxy S24 Ultra", "XAA", None));
        assert_eq!(result.region, "USA (Unlocked)");
        assert_eq!(result.latest_firmware, "S928BXXU4CXL2");
        assert_eq!(result.android_version, "14");
        assert_eq!(result.one_ui_version, "6.1");
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(!result.bootloader_locked);
        assert_eq!(
            result.warnings,
            [
                "Always backup your data before updating",
                "Ensure stable internet connection during update"
            ]
        );
    }

    #[test]
    fn carrier_csc_is_medium_risk_with_delay_warning() {
        let result = check_compatibility(&input("Galaxy S23", "VZW", Some("S918USQU1AWA1")));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.risk_description, "Carrier-locked device may have delayed updates");
        assert!(result.bootloader_locked);
        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.warnings[0], "Carrier updates may be delayed by 1-2 weeks");

        let att = check_compatibility(&input("Galaxy S23", "ATT", None));
        assert_eq!(att.risk_level, RiskLevel::Medium);
        assert_eq!(att.warnings.len(), 2);
    }

    #[test]
    fn axa_firmware_is_high_risk_regardless_of_csc() {
        for (csc, _) in tables::csc_codes().chain([("ZZZ", "")]) {
            let level = assess_risk(csc, Some("G998BXXU1AXA3"));
            assert_eq!(level, RiskLevel::High, "csc {csc}");
        }

        let result = check_compatibility(&input("Galaxy A54", "TMB", Some("A546BAXA1")));
        assert_eq!(
            result.warnings,
            [
                "This update may prevent downgrading to previous firmware",
                "Carrier updates may be delayed by 1-2 weeks",
                "Always backup your data before updating",
                "Ensure stable internet connection during update",
            ]
        );
    }

    #[test]
    fn unknown_csc_reports_unknown_region() {
        let result = check_compatibility(&input("Galaxy Note 20", "ABC", None));
        assert_eq!(result.region, "Unknown Region");
        assert_eq!(result.latest_firmware, "G998BXXU4CXL2");
        assert_eq!(result.android_version, "13");
    }

    #[test]
    fn csc_is_normalized_and_blank_firmware_ignored() {
        let form = FirmwareForm {
            model: Some("Galaxy S24".to_string()),
            csc: Some(" tmb ".to_string()),
            current_firmware: Some("  ".to_string()),
        };
        let input = form.validate().expect("valid form");
        assert_eq!(input.csc, "TMB");
        assert_eq!(input.current_firmware, None);
    }
}
