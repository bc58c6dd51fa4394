//! Classification and statistics over a loaded housing register.

pub mod aggregate;
pub mod classify;
pub mod extremum;

pub use crate::error::ClassifyError;
pub use aggregate::count_categories;
pub use classify::{classify, classify_houses, FloorValue};
pub use extremum::{least_area_per_resident, min_area_residential};

use crate::model::{House, HousingSummary};
use tracing::debug;

/// Runs classification, tallying and the area search over `houses`.
pub fn summarize(houses: &[House]) -> Result<HousingSummary, ClassifyError> {
    let categories = classify_houses(houses)?;
    let category_counts = count_categories(categories);
    debug!(categories = category_counts.len(), "classified houses");

    Ok(HousingSummary {
        total_houses: houses.len(),
        category_counts,
        least_area_per_resident: least_area_per_resident(houses),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeightCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summarize() {
        let houses = vec![
            House::new("A", 3, 100.0, 50),
            House::new("B", 12, 60.0, 40),
            House::new("C", 4, 300.0, 20),
        ];
        let summary = summarize(&houses).unwrap();

        assert_eq!(summary.total_houses, 3);
        assert_eq!(summary.category_counts.get(HeightCategory::LowRise), Some(2));
        assert_eq!(summary.category_counts.get(HeightCategory::MidRise), Some(1));
        assert_eq!(summary.least_area_address(), Some("B"));
    }

    #[test]
    fn test_summarize_propagates_invalid_floors() {
        let houses = vec![House::new("A", -1, 100.0, 50)];

        assert_eq!(
            summarize(&houses),
            Err(ClassifyError::InvalidValue { value: -1 })
        );
    }
}
