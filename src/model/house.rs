use serde::Serialize;
use std::collections::HashMap;

/// One building row from the housing register.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    pub floor_count: i64,
    pub heating_value: f64,
    pub area_residential: f64,
    pub population: i64,
    pub house_address: String,
    pub extra: HashMap<String, String>, // column name → raw text
}

impl House {
    /// Residential square meters per resident.
    ///
    /// Population is not checked: zero yields an infinite or NaN ratio.
    #[must_use]
    pub fn area_per_resident(&self) -> f64 {
        self.area_residential / self.population as f64
    }
}

#[cfg(test)]
impl House {
    pub(crate) fn new(
        house_address: &str,
        floor_count: i64,
        area_residential: f64,
        population: i64,
    ) -> Self {
        Self {
            floor_count,
            heating_value: 1.0,
            area_residential,
            population,
            house_address: house_address.to_string(),
            extra: HashMap::new(),
        }
    }
}
