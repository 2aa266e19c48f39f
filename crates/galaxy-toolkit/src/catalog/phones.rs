use serde::Serialize;

/// Spec sheet with pre-tabulated comparison scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneSpecs {
    pub display: &'static str,
    pub display_score: u8,
    pub camera: &'static str,
    pub camera_score: u8,
    pub processor: &'static str,
    pub battery: &'static str,
    pub storage: &'static str,
    pub storage_score: u8,
}

impl PhoneSpecs {
    /// Capacity in mAh taken from the leading digits of the battery string.
    pub fn battery_mah(&self) -> u32 {
        self.battery
            .chars()
            .take_while(|ch| ch.is_ascii_digit())
            .fold(0u32, |acc, ch| {
                acc.saturating_mul(10)
                    .saturating_add(ch.to_digit(10).unwrap_or(0))
            })
    }
}

/// Immutable reference record for a supported Samsung model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneModel {
    pub id: u32,
    pub name: &'static str,
    pub release_year: u16,
    pub specs: PhoneSpecs,
}

pub fn phone_models() -> &'static [PhoneModel] {
    PHONE_MODELS
}

pub fn find_by_name(name: &str) -> Option<&'static PhoneModel> {
    PHONE_MODELS.iter().find(|model| model.name == name)
}

pub fn find_by_id(id: u32) -> Option<&'static PhoneModel> {
    PHONE_MODELS.iter().find(|model| model.id == id)
}

const PHONE_MODELS: &[PhoneModel] = &[
    PhoneModel {
        id: 1,
        name: "Galaxy S24 Ultra",
        release_year: 2024,
        specs: PhoneSpecs {
            display: "6.8\" QHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 98,
            camera: "200MP main + 50MP 5x periscope",
            camera_score: 98,
            processor: "Snapdragon 8 Gen 3 for Galaxy",
            battery: "5000mAh",
            storage: "256GB / 512GB / 1TB",
            storage_score: 95,
        },
    },
    PhoneModel {
        id: 2,
        name: "Galaxy S24 Plus",
        release_year: 2024,
        specs: PhoneSpecs {
            display: "6.7\" QHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 94,
            camera: "50MP main + 10MP 3x telephoto",
            camera_score: 88,
            processor: "Exynos 2400",
            battery: "4900mAh",
            storage: "256GB / 512GB",
            storage_score: 85,
        },
    },
    PhoneModel {
        id: 3,
        name: "Galaxy S24",
        release_year: 2024,
        specs: PhoneSpecs {
            display: "6.2\" FHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 90,
            camera: "50MP main + 10MP 3x telephoto",
            camera_score: 88,
            processor: "Exynos 2400",
            battery: "4000mAh",
            storage: "128GB / 256GB / 512GB",
            storage_score: 80,
        },
    },
    PhoneModel {
        id: 4,
        name: "Galaxy S23 Ultra",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.8\" QHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 96,
            camera: "200MP main + 10MP 10x periscope",
            camera_score: 95,
            processor: "Snapdragon 8 Gen 2 for Galaxy",
            battery: "5000mAh",
            storage: "256GB / 512GB / 1TB",
            storage_score: 95,
        },
    },
    PhoneModel {
        id: 5,
        name: "Galaxy S23 Plus",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.6\" FHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 90,
            camera: "50MP main + 10MP 3x telephoto",
            camera_score: 85,
            processor: "Snapdragon 8 Gen 2 for Galaxy",
            battery: "4700mAh",
            storage: "256GB / 512GB",
            storage_score: 85,
        },
    },
    PhoneModel {
        id: 6,
        name: "Galaxy S23",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.1\" FHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 87,
            camera: "50MP main + 10MP 3x telephoto",
            camera_score: 85,
            processor: "Snapdragon 8 Gen 2 for Galaxy",
            battery: "3900mAh",
            storage: "128GB / 256GB / 512GB",
            storage_score: 80,
        },
    },
    PhoneModel {
        id: 7,
        name: "Galaxy Note 20 Ultra",
        release_year: 2020,
        specs: PhoneSpecs {
            display: "6.9\" QHD+ Dynamic AMOLED 2X, 120Hz",
            display_score: 92,
            camera: "108MP main + 12MP 5x periscope",
            camera_score: 86,
            processor: "Exynos 990",
            battery: "4500mAh",
            storage: "256GB / 512GB + microSD",
            storage_score: 90,
        },
    },
    PhoneModel {
        id: 8,
        name: "Galaxy Note 20",
        release_year: 2020,
        specs: PhoneSpecs {
            display: "6.7\" FHD+ Super AMOLED Plus, 60Hz",
            display_score: 80,
            camera: "12MP main + 64MP telephoto",
            camera_score: 78,
            processor: "Exynos 990",
            battery: "4300mAh",
            storage: "128GB / 256GB",
            storage_score: 75,
        },
    },
    PhoneModel {
        id: 9,
        name: "Galaxy A54",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.4\" FHD+ Super AMOLED, 120Hz",
            display_score: 82,
            camera: "50MP main + 12MP ultrawide",
            camera_score: 75,
            processor: "Exynos 1380",
            battery: "5000mAh",
            storage: "128GB / 256GB + microSD",
            storage_score: 78,
        },
    },
    PhoneModel {
        id: 10,
        name: "Galaxy A34",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.6\" FHD+ Super AMOLED, 120Hz",
            display_score: 80,
            camera: "48MP main + 8MP ultrawide",
            camera_score: 70,
            processor: "Dimensity 1080",
            battery: "5000mAh",
            storage: "128GB / 256GB + microSD",
            storage_score: 78,
        },
    },
    PhoneModel {
        id: 11,
        name: "Galaxy Z Fold 5",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "7.6\" QXGA+ foldable Dynamic AMOLED 2X, 120Hz",
            display_score: 95,
            camera: "50MP main + 10MP 3x telephoto",
            camera_score: 86,
            processor: "Snapdragon 8 Gen 2 for Galaxy",
            battery: "4400mAh",
            storage: "256GB / 512GB / 1TB",
            storage_score: 95,
        },
    },
    PhoneModel {
        id: 12,
        name: "Galaxy Z Flip 5",
        release_year: 2023,
        specs: PhoneSpecs {
            display: "6.7\" FHD+ foldable Dynamic AMOLED 2X, 120Hz",
            display_score: 88,
            camera: "12MP main + 12MP ultrawide",
            camera_score: 78,
            processor: "Snapdragon 8 Gen 2 for Galaxy",
            battery: "3700mAh",
            storage: "256GB / 512GB",
            storage_score: 85,
        },
    },
];
