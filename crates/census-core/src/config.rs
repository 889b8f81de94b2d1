/// Run configuration — where the input tables live and where reports go.
use crate::error::CensusError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Recognized options for a census run.
///
/// There are no command-line flags or environment variables: the binary
/// reads an optional JSON file from the working directory and otherwise
/// falls back to the conventional filenames below. Input paths stay out
/// of the core algorithms and are injected here, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// File-metadata catalog CSV (columns: fileFormat, name, id, study).
    pub file_info_path: PathBuf,

    /// Download-event log CSV (columns: id, name, study).
    pub download_log_path: PathBuf,

    /// Directory that receives the three report CSVs.
    pub output_dir: PathBuf,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            file_info_path: PathBuf::from("portal_files_information.csv"),
            download_log_path: PathBuf::from("portal_download_log.csv"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl CensusConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error — a
    /// typo in the config must not silently revert every option.
    pub fn load_or_default(path: &Path) -> Result<Self, CensusError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CensusError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| CensusError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = CensusConfig::load_or_default(&tmp.path().join("none.json")).unwrap();
        assert_eq!(config, CensusConfig::default());
    }

    /// Options named in the file override defaults; the rest keep them.
    #[test]
    fn partial_config_overrides_only_named_options() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("census.json");
        fs::write(&path, r#"{"output_dir": "reports"}"#).unwrap();

        let config = CensusConfig::load_or_default(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(
            config.file_info_path,
            CensusConfig::default().file_info_path
        );
    }

    /// Malformed JSON must fail loudly, not revert to defaults.
    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("census.json");
        fs::write(&path, "{not json").unwrap();

        let err = CensusConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, CensusError::ConfigParse { .. }));
    }
}
