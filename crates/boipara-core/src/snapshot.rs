use std::collections::HashSet;
use std::path::Path;

use crate::location::LocationRecord;
use crate::ConfigError;

/// Load and validate a location list from a local snapshot file.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_locations(path: &Path) -> Result<Vec<LocationRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LocationsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let locations = parse_locations(&content, is_json).map_err(|reason| {
        ConfigError::LocationsFileParse {
            path: path.display().to_string(),
            reason,
        }
    })?;

    validate_locations(&locations)?;

    Ok(locations)
}

fn parse_locations(content: &str, is_json: bool) -> Result<Vec<LocationRecord>, String> {
    if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Reject records that could never be selected or resolved unambiguously.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] on an empty id, an empty division,
/// district or thana, or a duplicated id.
pub fn validate_locations(locations: &[LocationRecord]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for record in locations {
        if record.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "location '{}' has an empty _id",
                record.path().join(" / ")
            )));
        }

        for (field, value) in [
            ("division", &record.division),
            ("district", &record.district),
            ("thana", &record.thana),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "location '{}' has an empty {field}",
                    record.id
                )));
            }
        }

        if !seen_ids.insert(record.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate location _id: '{}'",
                record.id
            )));
        }
    }

    Ok(())
}
