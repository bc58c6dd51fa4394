use housing_stats::analysis::summarize;
use housing_stats::error::ParseError;
use housing_stats::model::HeightCategory;
use housing_stats::parser::load_houses;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn register(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_summary_from_file() {
    let file = register(
        "house_address,floor_count,heating_value,area_residential,population,year_built\n\
         Gagarina 12,5,0.95,1800,60,1968\n\
         Lenina 40,9,1.10,5400,240,1975\n\
         Sadovaya 3,22,1.40,14000,700,2004\n\
         Mira 1,2,0.70,300,8,1931\n",
    );

    let houses = load_houses(file.path()).unwrap();
    assert_eq!(houses.len(), 4);
    assert_eq!(houses[3].extra.get("year_built").map(String::as_str), Some("1931"));

    let summary = summarize(&houses).unwrap();
    assert_eq!(
        summary.category_counts.to_string(),
        "{'Low-rise': 2, 'Mid-rise': 1, 'High-rise': 1}"
    );
    assert_eq!(summary.category_counts.get(HeightCategory::LowRise), Some(2));
    // 1800/60 = 30, 5400/240 = 22.5, 14000/700 = 20, 300/8 = 37.5
    assert_eq!(summary.least_area_address(), Some("Sadovaya 3"));
}

#[test]
fn test_empty_register() {
    let file = register("house_address,floor_count,heating_value,area_residential,population\n");

    let houses = load_houses(file.path()).unwrap();
    let summary = summarize(&houses).unwrap();

    assert_eq!(summary.total_houses, 0);
    assert!(summary.category_counts.is_empty());
    assert_eq!(summary.least_area_address(), None);
}

#[test]
fn test_non_numeric_floor_count_aborts_load() {
    let file = register(
        "house_address,floor_count,heating_value,area_residential,population\n\
         A,4,1.0,100,5\n\
         B,abc,1.0,100,5\n",
    );

    let err = load_houses(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidInteger { row: 2, column: "floor_count", .. }
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_houses(dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, ParseError::FileRead { .. }));
}
