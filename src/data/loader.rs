//! RON data loader
//!
//! Loads narrative tables from external RON files, with fallback to the
//! built-in dungeon.

use std::fs;
use std::path::Path;

use super::config::ConfigError;
use super::narrative::{default_narrative, NarrativeTable};

/// Load the narrative table, falling back to the built-in one
///
/// A missing path means the built-in table. A file that cannot be read or
/// parsed is logged and also falls back.
pub fn load_narrative(path: Option<&Path>) -> NarrativeTable {
    let Some(path) = path else {
        return default_narrative();
    };

    match read_narrative(path) {
        Ok(table) => {
            log::info!("loaded {} rooms from {}", table.len(), path.display());
            table
        }
        Err(e) => {
            log::warn!("failed to load narrative {}: {}. Using defaults.", path.display(), e);
            default_narrative()
        }
    }
}

/// Read a narrative table without any fallback
pub fn read_narrative(path: &Path) -> Result<NarrativeTable, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ron::from_str(&content)?)
}

/// Export the built-in narrative to a RON file for easy editing
pub fn export_default_narrative(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let ron = ron::ser::to_string_pretty(&default_narrative(), ron::ser::PrettyConfig::default())?;
    fs::write(path, ron).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_export_then_load() {
        let path = env::temp_dir().join(format!("mazedelve-{}", std::process::id())).join("narrative.ron");
        let result = export_default_narrative(&path);
        assert!(result.is_ok(), "Failed to export narrative: {:?}", result.err());

        let table = read_narrative(&path).unwrap();
        assert_eq!(table, default_narrative());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let table = load_narrative(Some(Path::new("/nonexistent/narrative.ron")));
        assert_eq!(table.len(), 25);
    }

    #[test]
    fn test_no_path_is_builtin() {
        assert_eq!(load_narrative(None), default_narrative());
    }

    #[test]
    fn test_custom_table_without_ambushes() {
        let table: NarrativeTable = ron::from_str(
            r#"(rooms: [(description: "A bare cell.", choice: "Kick the wall?")])"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.ambush_lines.is_empty());
    }
}
