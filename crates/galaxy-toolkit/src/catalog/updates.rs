use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Major,
    Security,
    Feature,
}

impl UpdateType {
    pub const ALL: [UpdateType; 3] = [UpdateType::Major, UpdateType::Security, UpdateType::Feature];

    pub fn label(&self) -> &'static str {
        match self {
            UpdateType::Major => "Major Update",
            UpdateType::Security => "Security Update",
            UpdateType::Feature => "Feature Update",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::Major => "major",
            UpdateType::Security => "security",
            UpdateType::Feature => "feature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Available,
    Rolling,
    Paused,
}

impl UpdateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateStatus::Available => "available",
            UpdateStatus::Rolling => "rolling",
            UpdateStatus::Paused => "paused",
        }
    }
}

/// A published One UI / Android release for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecord {
    pub id: u32,
    pub model: &'static str,
    pub version: &'static str,
    pub android_version: &'static str,
    #[serde(rename = "type")]
    pub update_type: UpdateType,
    pub status: UpdateStatus,
    pub release_date: NaiveDate,
    pub size: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub regions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog_url: Option<&'static str>,
}

/// Seed list of tracked updates, in no particular order.
pub fn standard_updates() -> Vec<UpdateRecord> {
    vec![
        UpdateRecord {
            id: 1,
            model: "Galaxy S24 Ultra",
            version: "One UI 6.1",
            android_version: "Android 14",
            update_type: UpdateType::Major,
            status: UpdateStatus::Available,
            release_date: ymd(2024, 3, 28),
            size: "2.3 GB",
            description: "Galaxy AI features arrive alongside a refreshed One UI 6.1 experience.",
            features: vec!["Circle to Search", "Live Translate", "Note Assist", "Photo Assist"],
            regions: vec!["USA", "Europe", "South Korea"],
            changelog_url: Some("https://doc.samsungmobile.com/SM-S928U/XAA/doc.html"),
        },
        UpdateRecord {
            id: 2,
            model: "Galaxy S24",
            version: "S921BXXU2AXD5",
            android_version: "Android 14",
            update_type: UpdateType::Security,
            status: UpdateStatus::Rolling,
            release_date: ymd(2024, 4, 15),
            size: "412 MB",
            description: "April 2024 security patch with fixes for critical vulnerabilities.",
            features: vec!["April 2024 security patch", "Camera stability fixes"],
            regions: vec!["Europe", "India"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 3,
            model: "Galaxy S23 Ultra",
            version: "One UI 6.1",
            android_version: "Android 14",
            update_type: UpdateType::Major,
            status: UpdateStatus::Rolling,
            release_date: ymd(2024, 3, 26),
            size: "2.1 GB",
            description: "Galaxy AI comes to the S23 series with the One UI 6.1 upgrade.",
            features: vec!["Circle to Search", "Chat Assist", "Generative Edit"],
            regions: vec!["USA", "Europe", "South Korea", "India"],
            changelog_url: Some("https://doc.samsungmobile.com/SM-S918U/XAA/doc.html"),
        },
        UpdateRecord {
            id: 4,
            model: "Galaxy S23",
            version: "S911BXXS3BXC1",
            android_version: "Android 14",
            update_type: UpdateType::Security,
            status: UpdateStatus::Available,
            release_date: ymd(2024, 3, 5),
            size: "356 MB",
            description: "March 2024 security maintenance release.",
            features: vec!["March 2024 security patch"],
            regions: vec!["Europe", "USA"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 5,
            model: "Galaxy Z Fold 5",
            version: "One UI 6.1",
            android_version: "Android 14",
            update_type: UpdateType::Major,
            status: UpdateStatus::Paused,
            release_date: ymd(2024, 4, 2),
            size: "2.4 GB",
            description: "One UI 6.1 rollout paused after reports of taskbar regressions.",
            features: vec!["Circle to Search", "Interpreter mode", "Taskbar refinements"],
            regions: vec!["South Korea"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 6,
            model: "Galaxy Z Flip 5",
            version: "F731BXXU2BXB7",
            android_version: "Android 14",
            update_type: UpdateType::Feature,
            status: UpdateStatus::Available,
            release_date: ymd(2024, 2, 20),
            size: "640 MB",
            description: "Flex Window widget additions and camera improvements.",
            features: vec!["New Flex Window widgets", "Improved low-light capture"],
            regions: vec!["Europe", "USA", "Hong Kong"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 7,
            model: "Galaxy A54",
            version: "One UI 6.0",
            android_version: "Android 14",
            update_type: UpdateType::Major,
            status: UpdateStatus::Available,
            release_date: ymd(2023, 11, 30),
            size: "2.0 GB",
            description: "Android 14 based One UI 6.0 with redesigned quick panel.",
            features: vec!["Redesigned quick settings", "New camera widgets", "Modes and Routines"],
            regions: vec!["Europe", "India", "Latin America"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 8,
            model: "Galaxy A34",
            version: "A346BXXS4BXD1",
            android_version: "Android 14",
            update_type: UpdateType::Security,
            status: UpdateStatus::Rolling,
            release_date: ymd(2024, 4, 8),
            size: "298 MB",
            description: "April 2024 security patch for the Galaxy A34.",
            features: vec!["April 2024 security patch"],
            regions: vec!["Europe"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 9,
            model: "Galaxy S24 Plus",
            version: "S926BXXU1AXC3",
            android_version: "Android 14",
            update_type: UpdateType::Feature,
            status: UpdateStatus::Available,
            release_date: ymd(2024, 3, 12),
            size: "780 MB",
            description: "Camera zoom and display vividness improvements.",
            features: vec!["Improved 3x zoom detail", "Vivid display tuning"],
            regions: vec!["Europe", "USA"],
            changelog_url: None,
        },
        UpdateRecord {
            id: 10,
            model: "Galaxy Note 20 Ultra",
            version: "N986BXXS5HXA1",
            android_version: "Android 13",
            update_type: UpdateType::Security,
            status: UpdateStatus::Available,
            release_date: ymd(2024, 1, 22),
            size: "210 MB",
            description: "Quarterly security update for the Note 20 Ultra.",
            features: vec!["January 2024 security patch"],
            regions: vec!["Europe", "USA", "South Korea"],
            changelog_url: None,
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dates_are_valid() {
        assert!(standard_updates()
            .iter()
            .all(|update| update.release_date != NaiveDate::MIN));
    }

    #[test]
    fn type_serializes_under_type_key() {
        let update = &standard_updates()[1];
        let value = serde_json::to_value(update).expect("serializes");
        assert_eq!(value["type"], "security");
        assert_eq!(value["status"], "rolling");
        assert!(value.get("changelog_url").is_none());
    }
}
