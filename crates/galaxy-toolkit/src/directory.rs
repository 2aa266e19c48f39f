//! Navigable routes and the tool listing shown on the home route.

use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Tool(ToolKind),
}

impl Route {
    pub fn all() -> impl Iterator<Item = Route> {
        std::iter::once(Route::Home).chain(ToolKind::ALL.into_iter().map(Route::Tool))
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Home);
        }
        ToolKind::ALL
            .into_iter()
            .find(|kind| tool_path(*kind) == trimmed)
            .map(Route::Tool)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Tool(kind) => tool_path(*kind),
        }
    }

    pub fn tool(&self) -> Option<ToolKind> {
        match self {
            Route::Home => None,
            Route::Tool(kind) => Some(*kind),
        }
    }
}

fn tool_path(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::TradeIn => "/trade-in-estimator",
        ToolKind::BatteryHealth => "/battery-health-checker",
        ToolKind::PhoneComparison => "/phone-comparison",
        ToolKind::UpgradeAdvisor => "/upgrade-advisor",
        ToolKind::FirmwareChecker => "/firmware-checker",
        ToolKind::CustomizationGenerator => "/customization-generator",
        ToolKind::UpdateTracker => "/update-tracker",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    TradeIn,
    Technical,
    Comparison,
    Customization,
}

impl ToolCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::TradeIn => "Trade-In",
            ToolCategory::Technical => "Technical",
            ToolCategory::Comparison => "Comparison",
            ToolCategory::Customization => "Customization",
        }
    }
}

/// Category filter for the listing; `all` disables it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    TradeIn,
    Technical,
    Comparison,
    Customization,
}

impl CategoryFilter {
    fn matches(&self, category: ToolCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::TradeIn => category == ToolCategory::TradeIn,
            CategoryFilter::Technical => category == ToolCategory::Technical,
            CategoryFilter::Comparison => category == ToolCategory::Comparison,
            CategoryFilter::Customization => category == ToolCategory::Customization,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCard {
    pub id: u8,
    pub tool: ToolKind,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub path: &'static str,
}

pub fn tool_cards() -> Vec<ToolCard> {
    ToolKind::ALL
        .into_iter()
        .zip(1u8..)
        .map(|(kind, id)| {
            let (description, category) = card_details(kind);
            ToolCard {
                id,
                tool: kind,
                title: kind.label(),
                description,
                category,
                path: tool_path(kind),
            }
        })
        .collect()
}

fn card_details(kind: ToolKind) -> (&'static str, ToolCategory) {
    match kind {
        ToolKind::TradeIn => (
            "Get trade-in value estimates for your Samsung device with personalized resale tips.",
            ToolCategory::TradeIn,
        ),
        ToolKind::BatteryHealth => (
            "Analyze your Samsung battery health and get replacement recommendations.",
            ToolCategory::Technical,
        ),
        ToolKind::PhoneComparison => (
            "Compare Samsung models side-by-side with generated insights and recommendations.",
            ToolCategory::Comparison,
        ),
        ToolKind::UpgradeAdvisor => (
            "Get personalized upgrade recommendations based on your priorities and usage patterns.",
            ToolCategory::TradeIn,
        ),
        ToolKind::FirmwareChecker => (
            "Check firmware compatibility and get update risk assessments for your device.",
            ToolCategory::Technical,
        ),
        ToolKind::CustomizationGenerator => (
            "Generate custom One UI configurations with Good Lock modules and themes.",
            ToolCategory::Customization,
        ),
        ToolKind::UpdateTracker => (
            "Track the latest One UI and Android updates for your Samsung device.",
            ToolCategory::Technical,
        ),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: CategoryFilter,
}

/// Cards whose title or description contains the search text, case-insensitively.
pub fn search_tools(query: &DirectoryQuery) -> Vec<ToolCard> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase();
    tool_cards()
        .into_iter()
        .filter(|card| {
            needle.is_empty()
                || card.title.to_lowercase().contains(&needle)
                || card.description.to_lowercase().contains(&needle)
        })
        .filter(|card| query.category.matches(card.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        let routes: Vec<_> = Route::all().collect();
        assert_eq!(routes.len(), 8);
        for route in routes {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/firmware-checker/"), Some(Route::Tool(ToolKind::FirmwareChecker)));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn listing_filters_by_category_and_search() {
        let technical = search_tools(&DirectoryQuery {
            search: None,
            category: CategoryFilter::Technical,
        });
        assert_eq!(technical.len(), 3);

        let battery = search_tools(&DirectoryQuery {
            search: Some("BATTERY".to_string()),
            category: CategoryFilter::All,
        });
        assert_eq!(battery.len(), 1);
        assert_eq!(battery[0].path, "/battery-health-checker");

        let none = search_tools(&DirectoryQuery {
            search: Some("battery".to_string()),
            category: CategoryFilter::Customization,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn cards_are_numbered_in_tool_order() {
        let cards = tool_cards();
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[6].tool, ToolKind::UpdateTracker);
    }
}
