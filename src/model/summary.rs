use super::HeightCategory;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of buildings per height category, in first-seen order.
///
/// Categories that never occurred are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(HeightCategory, usize)>,
}

impl CategoryCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `category`, appending it if unseen.
    pub fn increment(&mut self, category: HeightCategory) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category, 1)),
        }
    }

    #[must_use]
    pub fn get(&self, category: HeightCategory) -> Option<usize> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeightCategory, usize)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (category, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{category}': {count}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category.label(), count)?;
        }
        map.end()
    }
}

/// The building with the least residential area per resident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPerResident {
    pub house_address: String,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingSummary {
    pub total_houses: usize,
    pub category_counts: CategoryCounts,
    pub least_area_per_resident: Option<AreaPerResident>,
}

impl HousingSummary {
    #[must_use]
    pub fn least_area_address(&self) -> Option<&str> {
        self.least_area_per_resident
            .as_ref()
            .map(|a| a.house_address.as_str())
    }
}
