use crate::error::ParseError;
use crate::model::House;
use crate::parser::field::{self, ColumnIndex};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads a comma-separated housing register.
///
/// The first line must be a header naming at least `floor_count`,
/// `heating_value`, `area_residential`, `population` and `house_address`.
/// Any other columns are kept as text in [`House::extra`].
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidInteger`] or [`ParseError::InvalidFloat`] if a
/// numeric column holds text that does not parse.
///
/// # Example
///
/// ```no_run
/// use housing_stats::parser::load_houses;
///
/// let houses = load_houses("housing_data.csv")?;
/// println!("{} houses", houses.len());
/// # Ok::<(), housing_stats::error::ParseError>(())
/// ```
pub fn load_houses<P: AsRef<Path>>(path: P) -> Result<Vec<House>, ParseError> {
    HouseReader::new().read_path(path)
}

/// Configurable reader for housing registers.
#[derive(Debug, Clone, Copy)]
pub struct HouseReader {
    delimiter: u8,
}

impl Default for HouseReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl HouseReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads the whole file into memory, then parses it.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<House>, ParseError> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(|source| ParseError::FileRead {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let houses = self.read_str(&content)?;
        debug!(path = %path_ref.display(), count = houses.len(), "loaded housing register");
        Ok(houses)
    }

    pub fn read_str(&self, content: &str) -> Result<Vec<House>, ParseError> {
        self.read_from(content.as_bytes())
    }

    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<House>, ParseError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        // Columns are only required once there is a row to read them from.
        let mut column_index: Option<ColumnIndex> = None;
        let mut houses = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let columns = match column_index {
                Some(columns) => columns,
                None => {
                    let columns = ColumnIndex::from_headers(&headers)?;
                    column_index = Some(columns);
                    columns
                }
            };
            houses.push(parse_row(index + 1, &headers, &columns, &record)?);
        }

        Ok(houses)
    }
}

fn parse_row(
    row: usize,
    headers: &StringRecord,
    columns: &ColumnIndex,
    record: &StringRecord,
) -> Result<House, ParseError> {
    let floor_count = field::integer(record, columns.floor_count, row, field::FLOOR_COUNT)?;
    let heating_value = field::float(record, columns.heating_value, row, field::HEATING_VALUE)?;
    let area_residential =
        field::float(record, columns.area_residential, row, field::AREA_RESIDENTIAL)?;
    let population = field::integer(record, columns.population, row, field::POPULATION)?;
    let house_address =
        field::raw(record, columns.house_address, row, field::HOUSE_ADDRESS)?.to_string();

    let extra: HashMap<String, String> = headers
        .iter()
        .zip(record.iter())
        .filter(|(name, _)| !field::TYPED_COLUMNS.contains(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(House {
        floor_count,
        heating_value,
        area_residential,
        population,
        house_address,
        extra,
    })
}
