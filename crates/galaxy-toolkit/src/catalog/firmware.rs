/// Region reported for CSC codes missing from the table.
pub const UNKNOWN_REGION: &str = "Unknown Region";

/// The unlocked US CSC. Every other US code is carrier-branded.
pub const US_UNLOCKED_CSC: &str = "XAA";

const CSC_REGIONS: &[(&str, &str)] = &[
    ("XAA", "USA (Unlocked)"),
    ("DBT", "Germany"),
    ("BTU", "United Kingdom"),
    ("CPW", "United Kingdom (Carphone Warehouse)"),
    ("TMB", "USA (T-Mobile)"),
    ("VZW", "USA (Verizon)"),
    ("ATT", "USA (AT&T)"),
    ("SPR", "USA (Sprint)"),
    ("KOO", "South Korea"),
    ("TGY", "Hong Kong"),
];

const US_CARRIER_CSCS: &[&str] = &["TMB", "VZW", "ATT", "SPR"];

/// Carriers known to hold back OTA rollouts.
const DELAYED_CARRIER_CSCS: &[&str] = &["VZW", "TMB"];

pub fn region_for_csc(csc: &str) -> &'static str {
    CSC_REGIONS
        .iter()
        .find(|(code, _)| *code == csc)
        .map(|(_, region)| *region)
        .unwrap_or(UNKNOWN_REGION)
}

pub fn csc_codes() -> impl Iterator<Item = (&'static str, &'static str)> {
    CSC_REGIONS.iter().copied()
}

pub fn is_us_csc(csc: &str) -> bool {
    csc == US_UNLOCKED_CSC || is_us_carrier_csc(csc)
}

pub fn is_us_carrier_csc(csc: &str) -> bool {
    US_CARRIER_CSCS.contains(&csc)
}

pub fn has_delayed_carrier_updates(csc: &str) -> bool {
    DELAYED_CARRIER_CSCS.contains(&csc)
}

/// Firmware build family for a model, matched on the model name.
pub fn firmware_prefix(model: &str) -> &'static str {
    if model.contains("S24") {
        "S928"
    } else if model.contains("S23") {
        "S918"
    } else if model.contains("A54") {
        "A546"
    } else {
        "G998"
    }
}

pub fn android_version(model: &str) -> &'static str {
    if model.contains("S24") || model.contains("S23") {
        "14"
    } else {
        "13"
    }
}

pub fn one_ui_version(model: &str) -> &'static str {
    if model.contains("S24") {
        "6.1"
    } else if model.contains("S23") {
        "6.0"
    } else {
        "5.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_csc_maps_to_unknown_region() {
        assert_eq!(region_for_csc("DBT"), "Germany");
        assert_eq!(region_for_csc("XYZ"), UNKNOWN_REGION);
    }

    #[test]
    fn unlocked_us_csc_is_not_a_carrier() {
        assert!(is_us_csc("XAA"));
        assert!(!is_us_carrier_csc("XAA"));
        assert!(is_us_carrier_csc("SPR"));
        assert!(!is_us_csc("KOO"));
    }

    #[test]
    fn prefix_and_versions_follow_model_family() {
        assert_eq!(firmware_prefix("Galaxy S24 Ultra"), "S928");
        assert_eq!(firmware_prefix("Galaxy A54"), "A546");
        assert_eq!(firmware_prefix("Galaxy Note 20"), "G998");
        assert_eq!(android_version("Galaxy S23"), "14");
        assert_eq!(android_version("Galaxy A34"), "13");
        assert_eq!(one_ui_version("Galaxy S24 Plus"), "6.1");
        assert_eq!(one_ui_version("Galaxy Z Fold 5"), "5.1");
    }
}
