use crate::error::ExportError;
use crate::model::HousingSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(summary: &HousingSummary, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(summary)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryCounts;

    #[test]
    fn test_export_without_extremum() {
        let summary = HousingSummary {
            total_houses: 0,
            category_counts: CategoryCounts::new(),
            least_area_per_resident: None,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        export_json(&summary, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total_houses"], 0);
        assert!(value["category_counts"].as_object().unwrap().is_empty());
        assert!(value["least_area_per_resident"].is_null());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let summary = HousingSummary {
            total_houses: 0,
            category_counts: CategoryCounts::new(),
            least_area_per_resident: None,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.json");
        let err = export_json(&summary, &path).unwrap_err();

        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
