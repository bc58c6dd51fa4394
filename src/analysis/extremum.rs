use crate::model::{AreaPerResident, House};
use tracing::warn;

/// Finds the house with the least residential area per resident.
///
/// Population is not validated. Ratios follow `f64` division, and a record only
/// replaces the running minimum (which starts at `+inf`) when strictly lower, so:
/// - ties keep the earliest house,
/// - an infinite ratio (zero population) or NaN is never selected,
/// - negative ratios are eligible.
///
/// Returns `None` when no house qualifies, including for an empty slice.
#[must_use]
pub fn least_area_per_resident(houses: &[House]) -> Option<AreaPerResident> {
    scan(houses).map(|(house, ratio)| AreaPerResident {
        house_address: house.house_address.clone(),
        ratio,
    })
}

/// Address of the house with the least residential area per resident.
#[must_use]
pub fn min_area_residential(houses: &[House]) -> Option<&str> {
    scan(houses).map(|(house, _)| house.house_address.as_str())
}

fn scan(houses: &[House]) -> Option<(&House, f64)> {
    let mut min_ratio = f64::INFINITY;
    let mut found = None;

    for house in houses {
        if house.population <= 0 {
            warn!(
                address = %house.house_address,
                population = house.population,
                "non-positive population"
            );
        }

        let ratio = house.area_per_resident();
        if ratio < min_ratio {
            min_ratio = ratio;
            found = Some(house);
        }
    }

    found.map(|house| (house, min_ratio))
}
