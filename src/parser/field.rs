use crate::error::ParseError;
use csv::StringRecord;

pub const FLOOR_COUNT: &str = "floor_count";
pub const HEATING_VALUE: &str = "heating_value";
pub const AREA_RESIDENTIAL: &str = "area_residential";
pub const POPULATION: &str = "population";
pub const HOUSE_ADDRESS: &str = "house_address";

/// Columns that become typed fields of [`House`](crate::model::House).
pub const TYPED_COLUMNS: [&str; 5] = [
    FLOOR_COUNT,
    HEATING_VALUE,
    AREA_RESIDENTIAL,
    POPULATION,
    HOUSE_ADDRESS,
];

/// Positions of the typed columns within the header row.
///
/// A repeated header name resolves to its last occurrence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    pub floor_count: usize,
    pub heating_value: usize,
    pub area_residential: usize,
    pub population: usize,
    pub house_address: usize,
}

impl ColumnIndex {
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == column)
                .last()
                .map(|(idx, _)| idx)
                .ok_or(ParseError::MissingColumn { column })
        };

        Ok(Self {
            floor_count: find(FLOOR_COUNT)?,
            heating_value: find(HEATING_VALUE)?,
            area_residential: find(AREA_RESIDENTIAL)?,
            population: find(POPULATION)?,
            house_address: find(HOUSE_ADDRESS)?,
        })
    }
}

pub(crate) fn raw<'r>(
    record: &'r StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<&'r str, ParseError> {
    record
        .get(idx)
        .ok_or(ParseError::MissingValue { row, column })
}

pub(crate) fn integer(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<i64, ParseError> {
    let value = raw(record, idx, row, column)?;
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            row,
            column,
            value: value.to_string(),
        })
}

pub(crate) fn float(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, ParseError> {
    let value = raw(record, idx, row, column)?;
    value.trim().parse().map_err(|_| ParseError::InvalidFloat {
        row,
        column,
        value: value.to_string(),
    })
}
