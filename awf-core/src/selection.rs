use serde::{Deserialize, Serialize};
use std::fmt;

/// Year preselected in the year dropdown when the dataset contains it.
pub const DEFAULT_YEAR: i32 = 2012;

/// The (region, year) pair currently chosen in the dashboard controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub year: i32,
}

impl Selection {
    pub fn new(region: impl Into<String>, year: i32) -> Self {
        Self {
            region: region.into(),
            year,
        }
    }

    /// True when a row with this region and year belongs to the selection.
    pub fn matches(&self, region: &str, year: i32) -> bool {
        self.region == region && self.year == year
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.region, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_both_fields() {
        let selection = Selection::new("NT", 2012);
        assert!(selection.matches("NT", 2012));
        assert!(!selection.matches("NT", 2013));
        assert!(!selection.matches("nt", 2012));
        assert!(!selection.matches("WA", 2012));
    }

    #[test]
    fn display_is_region_then_year() {
        assert_eq!(Selection::new("VI", 2019).to_string(), "VI, 2019");
    }
}
