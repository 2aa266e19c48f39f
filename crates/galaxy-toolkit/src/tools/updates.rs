use super::validation::optional_text;
use crate::catalog::updates::{standard_updates, UpdateRecord, UpdateType};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Update type filter; `all` disables it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Major,
    Security,
    Feature,
}

impl TypeFilter {
    fn matches(&self, update_type: UpdateType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Major => update_type == UpdateType::Major,
            TypeFilter::Security => update_type == UpdateType::Security,
            TypeFilter::Feature => update_type == UpdateType::Feature,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "type")]
    pub update_type: TypeFilter,
}

impl UpdateQuery {
    /// Trim text filters and drop blank ones.
    pub fn normalize(self) -> Self {
        Self {
            search: optional_text(self.search),
            model: optional_text(self.model),
            update_type: self.update_type,
        }
    }
}

pub fn matches_search(update: &UpdateRecord, search: Option<&str>) -> bool {
    let Some(needle) = search else {
        return true;
    };
    let needle = needle.to_lowercase();
    [update.model, update.version, update.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_model(update: &UpdateRecord, model: Option<&str>) -> bool {
    model.map_or(true, |model| update.model == model)
}

pub fn matches_type(update: &UpdateRecord, filter: TypeFilter) -> bool {
    filter.matches(update.update_type)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateStats {
    pub total: usize,
    pub major: usize,
    pub security: usize,
    pub feature: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateListing {
    pub updates: Vec<UpdateRecord>,
    pub stats: UpdateStats,
}

/// The tracked update list, newest first.
#[derive(Debug, Clone)]
pub struct UpdateFeed {
    updates: Vec<UpdateRecord>,
}

impl UpdateFeed {
    pub fn new(mut updates: Vec<UpdateRecord>) -> Self {
        updates.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        Self { updates }
    }

    pub fn standard() -> Self {
        Self::new(standard_updates())
    }

    pub fn all(&self) -> &[UpdateRecord] {
        &self.updates
    }

    pub fn find(&self, id: u32) -> Option<&UpdateRecord> {
        self.updates.iter().find(|update| update.id == id)
    }

    pub fn for_model<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a UpdateRecord> + 'a {
        self.updates
            .iter()
            .filter(move |update| update.model == model)
    }

    pub fn filter(&self, query: &UpdateQuery) -> UpdateListing {
        let updates: Vec<UpdateRecord> = self
            .updates
            .iter()
            .filter(|update| matches_search(update, query.search.as_deref()))
            .filter(|update| matches_model(update, query.model.as_deref()))
            .filter(|update| matches_type(update, query.update_type))
            .cloned()
            .collect();

        tracing::debug!(
            matched = updates.len(),
            total = self.updates.len(),
            "filtered update feed"
        );

        UpdateListing {
            updates,
            stats: self.stats(),
        }
    }

    /// Counts over the whole feed, independent of any filter.
    pub fn stats(&self) -> UpdateStats {
        self.updates
            .iter()
            .fold(UpdateStats::default(), |mut stats, update| {
                stats.total += 1;
                match update.update_type {
                    UpdateType::Major => stats.major += 1,
                    UpdateType::Security => stats.security += 1,
                    UpdateType::Feature => stats.feature += 1,
                }
                stats
            })
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    model: &'a str,
    version: &'a str,
    android_version: &'a str,
    #[serde(rename = "type")]
    update_type: &'a str,
    status: &'a str,
    release_date: String,
    size: &'a str,
    features: String,
    regions: String,
}

/// Write updates as CSV with a header row; list columns are `;`-joined.
pub fn write_csv<W: Write>(writer: W, updates: &[UpdateRecord]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for update in updates {
        csv_writer.serialize(CsvRow {
            id: update.id,
            model: update.model,
            version: update.version,
            android_version: update.android_version,
            update_type: update.update_type.as_str(),
            status: update.status.as_str(),
            release_date: update.release_date.format("%Y-%m-%d").to_string(),
            size: update.size,
            features: update.features.join("; "),
            regions: update.regions.join("; "),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
