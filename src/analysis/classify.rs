use crate::error::ClassifyError;
use crate::model::{HeightCategory, House};

const LOW_RISE_MAX_FLOORS: i64 = 5;
const MID_RISE_MAX_FLOORS: i64 = 16;

/// A floor count as handed to [`classify`], before it is known to be integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloorValue {
    Integer(i64),
    Real(f64),
}

macro_rules! floor_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for FloorValue {
            fn from(value: $t) -> Self {
                Self::Integer(i64::from(value))
            }
        })*
    };
}

floor_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FloorValue {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<f64> for FloorValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// Classifies a building by its number of floors.
///
/// - 1 to 5 floors: Low-rise
/// - 6 to 16 floors: Mid-rise
/// - 17 and above: High-rise
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidType`] for any real-valued input, even a
/// whole one such as `3.0`.
/// Returns [`ClassifyError::InvalidValue`] if the floor count is not positive.
///
/// # Example
///
/// ```
/// use housing_stats::analysis::classify;
/// use housing_stats::model::HeightCategory;
///
/// assert_eq!(classify(9)?, HeightCategory::MidRise);
/// assert!(classify(3.5).is_err());
/// # Ok::<(), housing_stats::error::ClassifyError>(())
/// ```
pub fn classify<F: Into<FloorValue>>(floor_count: F) -> Result<HeightCategory, ClassifyError> {
    let floors = match floor_count.into() {
        FloorValue::Integer(n) => n,
        FloorValue::Real(value) => return Err(ClassifyError::InvalidType { value }),
    };

    if floors <= 0 {
        return Err(ClassifyError::InvalidValue { value: floors });
    }

    Ok(if floors <= LOW_RISE_MAX_FLOORS {
        HeightCategory::LowRise
    } else if floors <= MID_RISE_MAX_FLOORS {
        HeightCategory::MidRise
    } else {
        HeightCategory::HighRise
    })
}

/// Classifies every house in order, stopping at the first invalid floor count.
pub fn classify_houses(houses: &[House]) -> Result<Vec<HeightCategory>, ClassifyError> {
    houses.iter().map(|h| classify(h.floor_count)).collect()
}
