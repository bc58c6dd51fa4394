use crate::model::{CategoryCounts, HeightCategory};

/// Tallies how many times each category occurs, in first-seen order.
pub fn count_categories<I>(categories: I) -> CategoryCounts
where
    I: IntoIterator<Item = HeightCategory>,
{
    let mut counts = CategoryCounts::new();
    for category in categories {
        counts.increment(category);
    }
    counts
}
