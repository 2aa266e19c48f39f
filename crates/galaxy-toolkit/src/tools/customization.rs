use super::validation::{required, required_text, ValidationError};
use crate::catalog::good_lock::{self, GoodLockModule};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const MAX_TIPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomizationFeature {
    GoodLock,
    Themes,
    Icons,
    Wallpapers,
    Sound,
    EdgePanels,
    AlwaysOn,
    Gestures,
}

impl CustomizationFeature {
    pub const ALL: [CustomizationFeature; 8] = [
        CustomizationFeature::GoodLock,
        CustomizationFeature::Themes,
        CustomizationFeature::Icons,
        CustomizationFeature::Wallpapers,
        CustomizationFeature::Sound,
        CustomizationFeature::EdgePanels,
        CustomizationFeature::AlwaysOn,
        CustomizationFeature::Gestures,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomizationFeature::GoodLock => "Good Lock",
            CustomizationFeature::Themes => "Themes",
            CustomizationFeature::Icons => "Icons",
            CustomizationFeature::Wallpapers => "Wallpapers",
            CustomizationFeature::Sound => "Sound",
            CustomizationFeature::EdgePanels => "Edge Panels",
            CustomizationFeature::AlwaysOn => "Always On",
            CustomizationFeature::Gestures => "Gestures",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationStyle {
    Minimal,
    Colorful,
    Dark,
    Gaming,
    Productivity,
}

impl CustomizationStyle {
    pub const ALL: [CustomizationStyle; 5] = [
        CustomizationStyle::Minimal,
        CustomizationStyle::Colorful,
        CustomizationStyle::Dark,
        CustomizationStyle::Gaming,
        CustomizationStyle::Productivity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomizationStyle::Minimal => "Minimal",
            CustomizationStyle::Colorful => "Colorful",
            CustomizationStyle::Dark => "Dark",
            CustomizationStyle::Gaming => "Gaming",
            CustomizationStyle::Productivity => "Productivity",
        }
    }

    fn primary_color(&self) -> &'static str {
        match self {
            CustomizationStyle::Minimal => "#000000",
            CustomizationStyle::Colorful => "#FF6B6B",
            CustomizationStyle::Dark => "#1A1A1A",
            CustomizationStyle::Gaming | CustomizationStyle::Productivity => "#007ACC",
        }
    }

    fn accent_color(&self) -> &'static str {
        match self {
            CustomizationStyle::Gaming => "#00FF00",
            _ => "#007ACC",
        }
    }

    fn wallpaper_category(&self) -> &'static str {
        match self {
            CustomizationStyle::Minimal => "abstract",
            CustomizationStyle::Gaming => "neon",
            _ => "nature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OneUiVersion {
    #[serde(rename = "6.0")]
    V6_0,
    #[serde(rename = "5.1")]
    V5_1,
    #[serde(rename = "5.0")]
    V5_0,
    #[serde(rename = "4.1")]
    V4_1,
}

impl OneUiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            OneUiVersion::V6_0 => "6.0",
            OneUiVersion::V5_1 => "5.1",
            OneUiVersion::V5_0 => "5.0",
            OneUiVersion::V4_1 => "4.1",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizationForm {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub one_ui_version: Option<OneUiVersion>,
    #[serde(default)]
    pub features: Vec<CustomizationFeature>,
    #[serde(default)]
    pub style: Option<CustomizationStyle>,
}

impl CustomizationForm {
    pub fn validate(self) -> Result<CustomizationInput, ValidationError> {
        let model = required_text("model", self.model)?;
        let one_ui_version = required("one_ui_version", self.one_ui_version)?;
        if self.features.is_empty() {
            return Err(ValidationError::EmptySelection("feature"));
        }
        let style = required("style", self.style)?;

        Ok(CustomizationInput {
            model,
            one_ui_version,
            features: self.features.into_iter().collect(),
            style,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationInput {
    pub model: String,
    pub one_ui_version: OneUiVersion,
    pub features: BTreeSet<CustomizationFeature>,
    pub style: CustomizationStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoodLockSettings {
    pub multi_window: bool,
    pub sound_enhancement: bool,
    pub task_changer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundProfile {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dolby_atmos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_cancellation: Option<bool>,
}

/// Generated settings for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureConfig {
    GoodLock {
        description: &'static str,
        modules: &'static [GoodLockModule],
        settings: GoodLockSettings,
    },
    Themes {
        description: &'static str,
        primary_color: &'static str,
        accent_color: &'static str,
        wallpaper_style: CustomizationStyle,
        icon_pack: &'static str,
    },
    Wallpapers {
        description: &'static str,
        #[serde(rename = "type")]
        kind: &'static str,
        category: &'static str,
        auto_change: bool,
        interval: &'static str,
    },
    Sound {
        description: &'static str,
        profiles: Vec<SoundProfile>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizationConfig {
    pub model: String,
    pub one_ui_version: OneUiVersion,
    pub features: Vec<&'static str>,
    pub style: &'static str,
    pub configs: BTreeMap<CustomizationFeature, FeatureConfig>,
    pub good_lock_modules: Vec<GoodLockModule>,
    pub installation_steps: Vec<&'static str>,
    pub tips: Vec<&'static str>,
}

pub fn generate_config(input: &CustomizationInput) -> CustomizationConfig {
    let configs = input
        .features
        .iter()
        .filter_map(|feature| {
            feature_config(*feature, input.style).map(|config| (*feature, config))
        })
        .collect();

    CustomizationConfig {
        model: input.model.clone(),
        one_ui_version: input.one_ui_version,
        features: input.features.iter().map(|feature| feature.label()).collect(),
        style: input.style.label(),
        configs,
        good_lock_modules: relevant_modules(&input.features),
        installation_steps: installation_steps(&input.features),
        tips: tips(input.style, &input.features),
    }
}

fn feature_config(
    feature: CustomizationFeature,
    style: CustomizationStyle,
) -> Option<FeatureConfig> {
    match feature {
        CustomizationFeature::GoodLock => Some(FeatureConfig::GoodLock {
            description: "Good Lock module configuration",
            modules: good_lock::modules_for(CustomizationFeature::GoodLock),
            settings: GoodLockSettings {
                multi_window: style == CustomizationStyle::Productivity,
                sound_enhancement: style == CustomizationStyle::Gaming,
                task_changer: true,
            },
        }),
        CustomizationFeature::Themes => Some(FeatureConfig::Themes {
            description: "Theme and visual customization",
            primary_color: style.primary_color(),
            accent_color: style.accent_color(),
            wallpaper_style: style,
            icon_pack: if style == CustomizationStyle::Minimal {
                "Clean"
            } else {
                "Dynamic"
            },
        }),
        CustomizationFeature::Wallpapers => Some(FeatureConfig::Wallpapers {
            description: "Dynamic wallpaper settings",
            kind: "dynamic",
            category: style.wallpaper_category(),
            auto_change: true,
            interval: "1 hour",
        }),
        CustomizationFeature::Sound => Some(FeatureConfig::Sound {
            description: "Audio profile configuration",
            profiles: vec![
                SoundProfile {
                    name: "Gaming",
                    enhanced: Some(style == CustomizationStyle::Gaming),
                    dolby_atmos: None,
                    noise_cancellation: None,
                },
                SoundProfile {
                    name: "Music",
                    enhanced: None,
                    dolby_atmos: Some(true),
                    noise_cancellation: None,
                },
                SoundProfile {
                    name: "Calls",
                    enhanced: None,
                    dolby_atmos: None,
                    noise_cancellation: Some(true),
                },
            ],
        }),
        CustomizationFeature::Icons
        | CustomizationFeature::EdgePanels
        | CustomizationFeature::AlwaysOn
        | CustomizationFeature::Gestures => None,
    }
}

fn relevant_modules(features: &BTreeSet<CustomizationFeature>) -> Vec<GoodLockModule> {
    let mut modules: Vec<GoodLockModule> = Vec::new();
    for module in features
        .iter()
        .flat_map(|feature| good_lock::modules_for(*feature))
    {
        if !modules.iter().any(|existing| existing.name == module.name) {
            modules.push(*module);
        }
    }
    modules
}

fn installation_steps(features: &BTreeSet<CustomizationFeature>) -> Vec<&'static str> {
    let mut steps = vec![
        "Download Galaxy Store app if not already installed",
        "Search for \"Good Lock\" in Galaxy Store and install",
        "Open Good Lock and install required modules",
    ];
    if features.contains(&CustomizationFeature::Themes) {
        steps.push("Apply custom theme through Settings > Themes");
    }
    if features.contains(&CustomizationFeature::Wallpapers) {
        steps.push("Set dynamic wallpapers through Settings > Wallpapers");
    }
    steps.push("Restart your device to apply all changes");
    steps
}

fn tips(
    style: CustomizationStyle,
    features: &BTreeSet<CustomizationFeature>,
) -> Vec<&'static str> {
    let mut tips = Vec::new();
    match style {
        CustomizationStyle::Minimal => {
            tips.push("Use fewer widgets and apps on home screen for cleaner look")
        }
        CustomizationStyle::Gaming => {
            tips.push("Enable Game Mode for better performance during gaming")
        }
        _ => {}
    }
    if features.contains(&CustomizationFeature::EdgePanels) {
        tips.push("Customize edge panels for quick access to frequently used apps");
    }
    tips.extend([
        "Backup your current settings before applying new configurations",
        "Test configurations gradually to find what works best for you",
        "Join Samsung Members community for more customization tips",
    ]);
    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(features: &[CustomizationFeature], style: CustomizationStyle) -> CustomizationInput {
        CustomizationInput {
            model: "Galaxy S24".to_string(),
            one_ui_version: OneUiVersion::V6_0,
            features: features.iter().copied().collect(),
            style,
        }
    }

    #[test]
    fn only_features_with_generators_produce_configs() {
        let config = generate_config(&input(
            &[
                CustomizationFeature::Gestures,
                CustomizationFeature::Themes,
                CustomizationFeature::Icons,
            ],
            CustomizationStyle::Colorful,
        ));
        assert_eq!(config.configs.len(), 1);
        match config.configs.get(&CustomizationFeature::Themes) {
            Some(FeatureConfig::Themes {
                primary_color,
                accent_color,
                icon_pack,
                ..
            }) => {
                assert_eq!(*primary_color, "#FF6B6B");
                assert_eq!(*accent_color, "#007ACC");
                assert_eq!(*icon_pack, "Dynamic");
            }
            other => panic!("expected theme config, got {other:?}"),
        }
        assert_eq!(config.features, ["Themes", "Icons", "Gestures"]);
    }

    #[test]
    fn good_lock_settings_follow_style() {
        let config = generate_config(&input(
            &[CustomizationFeature::GoodLock, CustomizationFeature::Wallpapers],
            CustomizationStyle::Gaming,
        ));
        match config.configs.get(&CustomizationFeature::GoodLock) {
            Some(FeatureConfig::GoodLock { settings, modules, .. }) => {
                assert!(settings.sound_enhancement);
                assert!(!settings.multi_window);
                assert_eq!(modules.len(), 3);
            }
            other => panic!("expected good lock config, got {other:?}"),
        }
        match config.configs.get(&CustomizationFeature::Wallpapers) {
            Some(FeatureConfig::Wallpapers { category, .. }) => assert_eq!(*category, "neon"),
            other => panic!("expected wallpaper config, got {other:?}"),
        }
    }

    #[test]
    fn module_list_is_the_union_of_selected_features() {
        let config = generate_config(&input(
            &[
                CustomizationFeature::AlwaysOn,
                CustomizationFeature::EdgePanels,
                CustomizationFeature::Sound,
            ],
            CustomizationStyle::Dark,
        ));
        let names: Vec<_> = config.good_lock_modules.iter().map(|m| m.name).collect();
        assert_eq!(names, ["Edge Touch", "Edge Lighting+", "ClockFace"]);
    }

    #[test]
    fn steps_and_tips_insert_conditionals() {
        let config = generate_config(&input(
            &[
                CustomizationFeature::Themes,
                CustomizationFeature::Wallpapers,
                CustomizationFeature::EdgePanels,
            ],
            CustomizationStyle::Minimal,
        ));
        assert_eq!(config.installation_steps.len(), 6);
        assert_eq!(
            config.installation_steps.last().copied(),
            Some("Restart your device to apply all changes")
        );
        assert_eq!(config.tips.len(), 4);
        assert!(config.tips[0].contains("fewer widgets"));
        assert!(config.tips[1].contains("edge panels"));
    }

    #[test]
    fn configs_serialize_with_feature_keys() {
        let config = generate_config(&input(
            &[CustomizationFeature::Wallpapers],
            CustomizationStyle::Productivity,
        ));
        let value = serde_json::to_value(&config).expect("serializes");
        assert_eq!(value["configs"]["wallpapers"]["type"], "dynamic");
        assert_eq!(value["one_ui_version"], "6.0");
        assert_eq!(value["style"], "Productivity");
    }

    #[test]
    fn empty_feature_selection_is_rejected() {
        let form = CustomizationForm {
            model: Some("Galaxy S24".to_string()),
            one_ui_version: Some(OneUiVersion::V5_1),
            features: Vec::new(),
            style: Some(CustomizationStyle::Dark),
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptySelection("feature")));
    }
}
