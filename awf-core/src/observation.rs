use crate::dates::parse_observation_date;
use crate::error::{DataError, Result};
use crate::month::Month;
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Columns the loader requires; any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Region", "Estimated_fire_area", "Count"];

/// A CSV row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Estimated_fire_area")]
    estimated_fire_area: String,
    #[serde(rename = "Count")]
    count: String,
}

/// A single wildfire observation with its derived calendar fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub region: String,
    /// Estimated burnt area in km², `None` when the cell was blank.
    pub estimated_fire_area: Option<f64>,
    /// Number of fire pixels detected, `None` when the cell was blank.
    pub count: Option<f64>,
    pub month: Month,
    pub year: i32,
}

impl Observation {
    /// Build an observation, deriving `month` and `year` from `date`.
    pub fn new(
        date: NaiveDate,
        region: &str,
        estimated_fire_area: impl Into<Option<f64>>,
        count: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            date,
            region: region.to_string(),
            estimated_fire_area: estimated_fire_area.into(),
            count: count.into(),
            month: Month::from_date(&date),
            year: date.year(),
        }
    }

    /// Parse observation CSV text (with headers) into observations, in file order.
    pub fn parse_csv(csv_data: &str) -> Result<Vec<Observation>> {
        Observation::read_csv(csv_data.as_bytes())
    }

    /// Read observation CSV (with headers) from any reader.
    pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Observation>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column));
            }
        }

        let mut observations = Vec::new();
        for (index, result) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = result?;
            observations.push(row.into_observation(index + 1)?);
        }
        log::debug!("parsed {} observations", observations.len());
        Ok(observations)
    }
}

impl CsvRow {
    fn into_observation(self, row: usize) -> Result<Observation> {
        let date = parse_observation_date(&self.date).ok_or_else(|| DataError::DateParse {
            row,
            value: self.date.clone(),
        })?;
        if self.region.is_empty() {
            return Err(DataError::EmptyRegion { row });
        }
        let estimated_fire_area = parse_number(&self.estimated_fire_area, row, "Estimated_fire_area")?;
        let count = parse_number(&self.count, row, "Count")?;
        Ok(Observation::new(date, &self.region, estimated_fire_area, count))
    }
}

/// Blank cells are missing values; anything else must be a finite number.
fn parse_number(value: &str, row: usize, column: &'static str) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(DataError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        }),
    }
}
