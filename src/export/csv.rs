use crate::error::ExportError;
use crate::model::HousingSummary;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(summary: &HousingSummary, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Category", "Count"])?;

    for (category, count) in summary.category_counts.iter() {
        let count = count.to_string();
        writer.write_record([category.label(), count.as_str()])?;
    }

    if let Some(address) = summary.least_area_address() {
        writer.write_record(["Least area per resident", address])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
