use super::validation::{required_text, ValidationError};
use super::ToolError;
use crate::catalog::phones::{self, PhoneModel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Model1,
    Model2,
    Tie,
}

impl Winner {
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Winner::Model1,
            Ordering::Less => Winner::Model2,
            Ordering::Equal => Winner::Tie,
        }
    }

    /// The same verdict with the two models swapped.
    pub fn flipped(&self) -> Self {
        match self {
            Winner::Model1 => Winner::Model2,
            Winner::Model2 => Winner::Model1,
            Winner::Tie => Winner::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Display,
    Camera,
    Performance,
    Battery,
    Storage,
}

impl Category {
    const ALL: [Category; 5] = [
        Category::Display,
        Category::Camera,
        Category::Performance,
        Category::Battery,
        Category::Storage,
    ];

    fn name(&self) -> &'static str {
        match self {
            Category::Display => "Display",
            Category::Camera => "Camera",
            Category::Performance => "Performance",
            Category::Battery => "Battery",
            Category::Storage => "Storage",
        }
    }

    fn notes(&self) -> &'static str {
        match self {
            Category::Display => "Based on size, resolution, and refresh rate",
            Category::Camera => "Main camera megapixels and features",
            Category::Performance => "Processor performance and generation",
            Category::Battery => "Battery capacity and charging speed",
            Category::Storage => "Base storage and expandability",
        }
    }

    fn spec_value(&self, model: &PhoneModel) -> &'static str {
        match self {
            Category::Display => model.specs.display,
            Category::Camera => model.specs.camera,
            Category::Performance => model.specs.processor,
            Category::Battery => model.specs.battery,
            Category::Storage => model.specs.storage,
        }
    }

    fn rank(&self, model: &PhoneModel) -> u32 {
        match self {
            Category::Display => u32::from(model.specs.display_score),
            Category::Camera => u32::from(model.specs.camera_score),
            Category::Performance => u32::from(model.release_year),
            Category::Battery => model.specs.battery_mah(),
            Category::Storage => u32::from(model.specs.storage_score),
        }
    }

    fn judge(&self, model1: &PhoneModel, model2: &PhoneModel) -> CategoryComparison {
        CategoryComparison {
            name: self.name(),
            model1_value: self.spec_value(model1),
            model2_value: self.spec_value(model2),
            winner: Winner::from_ordering(self.rank(model1).cmp(&self.rank(model2))),
            notes: self.notes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonForm {
    #[serde(default)]
    pub model1: Option<String>,
    #[serde(default)]
    pub model2: Option<String>,
}

impl ComparisonForm {
    pub fn validate(self) -> Result<ComparisonInput, ValidationError> {
        let model1 = required_text("model1", self.model1)?;
        let model2 = required_text("model2", self.model2)?;
        if model1 == model2 {
            return Err(ValidationError::IdenticalModels);
        }
        Ok(ComparisonInput { model1, model2 })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonInput {
    pub model1: String,
    pub model2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedModel {
    pub name: &'static str,
    pub release_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryComparison {
    pub name: &'static str,
    pub model1_value: &'static str,
    pub model2_value: &'static str,
    pub winner: Winner,
    pub notes: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub winner: String,
    pub model1_strengths: Vec<String>,
    pub model2_strengths: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub model1: ComparedModel,
    pub model2: ComparedModel,
    pub categories: Vec<CategoryComparison>,
    pub summary: ComparisonSummary,
}

impl ComparisonResult {
    pub fn wins(&self, side: Winner) -> usize {
        self.categories
            .iter()
            .filter(|category| category.winner == side)
            .count()
    }
}

pub fn compare(input: &ComparisonInput) -> Result<ComparisonResult, ToolError> {
    let model1 = lookup(&input.model1)?;
    let model2 = lookup(&input.model2)?;
    Ok(compare_models(model1, model2))
}

fn lookup(name: &str) -> Result<&'static PhoneModel, ToolError> {
    phones::find_by_name(name).ok_or_else(|| {
        tracing::debug!(model = name, "comparison model missing from catalog");
        ToolError::ModelNotFound(name.to_string())
    })
}

pub fn compare_models(model1: &'static PhoneModel, model2: &'static PhoneModel) -> ComparisonResult {
    let categories: Vec<CategoryComparison> = Category::ALL
        .iter()
        .map(|category| category.judge(model1, model2))
        .collect();

    let model1_wins = categories
        .iter()
        .filter(|category| category.winner == Winner::Model1)
        .count();
    let model2_wins = categories
        .iter()
        .filter(|category| category.winner == Winner::Model2)
        .count();

    let (winner, recommendation) = match model1_wins.cmp(&model2_wins) {
        Ordering::Greater => (
            format!("{} wins with {} categories", model1.name, model1_wins),
            format!(
                "The {} offers better overall value with superior performance in key areas.",
                model1.name
            ),
        ),
        Ordering::Less => (
            format!("{} wins with {} categories", model2.name, model2_wins),
            format!(
                "The {} provides better features and performance for most users.",
                model2.name
            ),
        ),
        Ordering::Equal => (
            "It's a tie! Both phones excel in different areas".to_string(),
            "Choose based on your specific priorities - both phones offer excellent value."
                .to_string(),
        ),
    };

    ComparisonResult {
        model1: ComparedModel {
            name: model1.name,
            release_year: model1.release_year,
        },
        model2: ComparedModel {
            name: model2.name,
            release_year: model2.release_year,
        },
        categories,
        summary: ComparisonSummary {
            winner,
            model1_strengths: strengths(model1),
            model2_strengths: strengths(model2),
            recommendation,
        },
    }
}

fn strengths(model: &PhoneModel) -> Vec<String> {
    vec![
        model.specs.display.to_string(),
        model.specs.camera.to_string(),
        format!("{} release", model.release_year),
    ]
}
