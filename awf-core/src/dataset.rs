//! The observation dataset, loaded once and shared read-only afterwards.

use crate::error::{DataError, Result};
use crate::observation::Observation;
use crate::selection::{Selection, DEFAULT_YEAR};
use std::fs::File;
use std::path::Path;

/// Immutable collection of observations plus the distinct values the
/// dashboard controls offer.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
    /// Distinct regions in first-seen order.
    regions: Vec<String>,
    /// Distinct years, ascending.
    years: Vec<i32>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        let mut years: Vec<i32> = Vec::new();
        for obs in &observations {
            if !regions.contains(&obs.region) {
                regions.push(obs.region.clone());
            }
            if let Err(pos) = years.binary_search(&obs.year) {
                years.insert(pos, obs.year);
            }
        }
        Self {
            observations,
            regions,
            years,
        }
    }

    /// Parse a dataset from CSV text (typically embedded with `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Ok(Dataset::new(Observation::parse_csv(csv_data)?))
    }

    /// Load a dataset from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Dataset::new(Observation::read_csv(file)?);
        log::info!(
            "loaded {} observations ({} regions, {} years) from {}",
            dataset.len(),
            dataset.regions.len(),
            dataset.years.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Rows whose region and year both equal the selection, in file order.
    pub fn filter<'a>(
        &'a self,
        selection: &'a Selection,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations
            .iter()
            .filter(move |obs| selection.matches(&obs.region, obs.year))
    }

    /// Initial control values: the first-seen region and [`DEFAULT_YEAR`]
    /// (falling back to the earliest year). `None` for an empty dataset.
    pub fn default_selection(&self) -> Option<Selection> {
        let region = self.regions.first()?;
        let year = self
            .years
            .iter()
            .find(|y| **y == DEFAULT_YEAR)
            .or_else(|| self.years.first())
            .copied()?;
        Some(Selection::new(region.clone(), year))
    }
}
