pub mod category;
pub mod house;
pub mod summary;

pub use category::HeightCategory;
pub use house::House;
pub use summary::{AreaPerResident, CategoryCounts, HousingSummary};
