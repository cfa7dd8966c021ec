//! Startup dataset loading
//!
//! The tabular dataset only feeds the location dropdown; everything except
//! its `location` column is ignored.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{DomainError, LocationCatalog};

const LOCATION_COLUMN: &str = "location";

/// Read the dataset and build a [`LocationCatalog`] from its `location` column.
pub fn load_location_catalog(path: &Path) -> Result<LocationCatalog, DomainError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DomainError::dataset(format!("failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| DomainError::dataset(format!("failed to read headers: {}", e)))?;
    let column = headers
        .iter()
        .position(|name| name == LOCATION_COLUMN)
        .ok_or_else(|| {
            DomainError::dataset(format!("dataset has no '{}' column", LOCATION_COLUMN))
        })?;

    let mut raw_locations = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| DomainError::dataset(format!("failed to read record: {}", e)))?;
        if let Some(value) = record.get(column) {
            raw_locations.push(value.to_string());
        }
    }

    Ok(LocationCatalog::new(raw_locations))
}

/// Load the catalog with degraded-startup semantics: a missing or unreadable
/// dataset yields an empty catalog instead of aborting startup.
pub fn load_or_empty(path: &Path) -> LocationCatalog {
    if !path.exists() {
        warn!(path = %path.display(), "Dataset not found, location catalog will be empty");
        return LocationCatalog::empty();
    }

    match load_location_catalog(path) {
        Ok(catalog) => {
            info!(
                path = %path.display(),
                locations = catalog.len(),
                "Loaded location catalog"
            );
            catalog
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load dataset");
            LocationCatalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_distinct_sorted_locations() {
        let file = write_dataset(
            "location,price,area_sqft\n\
             Gotri,4500000,1200\n\
             Alkapuri,6100000,1400\n\
             Gotri,3900000,1000\n",
        );

        let catalog = load_location_catalog(file.path()).unwrap();
        assert_eq!(catalog.names(), ["Alkapuri", "Gotri"]);
    }

    #[test]
    fn test_blank_locations_dropped() {
        let file = write_dataset("location\nAkota\n\n  \nManjalpur\n");
        let catalog = load_location_catalog(file.path()).unwrap();
        assert_eq!(catalog.names(), ["Akota", "Manjalpur"]);
    }

    #[test]
    fn test_missing_location_column_is_error() {
        let file = write_dataset("price,area_sqft\n4500000,1200\n");
        let err = load_location_catalog(file.path()).unwrap_err();
        assert!(matches!(err, DomainError::Dataset { .. }));
    }

    #[test]
    fn test_missing_file_degrades_to_empty_catalog() {
        let catalog = load_or_empty(Path::new("/nonexistent/houses.csv"));
        assert!(catalog.is_empty());
    }
}
