pub mod field;
pub mod houses;

pub use crate::error::ParseError;
pub use houses::{load_houses, HouseReader};
