use crate::tools::customization::CustomizationFeature;
use serde::Serialize;

/// A Good Lock plugin as listed in the Galaxy Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoodLockModule {
    pub name: &'static str,
    pub description: &'static str,
}

const CORE_MODULES: &[GoodLockModule] = &[
    GoodLockModule {
        name: "MultiStar",
        description: "Multi-window enhancements",
    },
    GoodLockModule {
        name: "Sound Assistant",
        description: "Audio customization",
    },
    GoodLockModule {
        name: "Task Changer",
        description: "Recent apps customization",
    },
];

const THEME_MODULES: &[GoodLockModule] = &[
    GoodLockModule {
        name: "Theme Park",
        description: "Create custom themes",
    },
    GoodLockModule {
        name: "Icon Pack Studio",
        description: "Design custom icons",
    },
];

const EDGE_MODULES: &[GoodLockModule] = &[
    GoodLockModule {
        name: "Edge Touch",
        description: "Edge sensitivity control",
    },
    GoodLockModule {
        name: "Edge Lighting+",
        description: "Enhanced edge lighting",
    },
];

const ALWAYS_ON_MODULES: &[GoodLockModule] = &[GoodLockModule {
    name: "ClockFace",
    description: "Always On Display customization",
}];

/// Modules a feature pulls in. Features without a Good Lock counterpart map to nothing.
pub fn modules_for(feature: CustomizationFeature) -> &'static [GoodLockModule] {
    match feature {
        CustomizationFeature::GoodLock => CORE_MODULES,
        CustomizationFeature::Themes => THEME_MODULES,
        CustomizationFeature::EdgePanels => EDGE_MODULES,
        CustomizationFeature::AlwaysOn => ALWAYS_ON_MODULES,
        CustomizationFeature::Icons
        | CustomizationFeature::Wallpapers
        | CustomizationFeature::Sound
        | CustomizationFeature::Gestures => &[],
    }
}
