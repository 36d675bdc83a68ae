//! JSON settings reader.
//!
//! Settings live in a plugin folder as individual `*.json` files. They are
//! read in sorted path order at data-load time and validated against the
//! parser version; nothing in them reaches the inventory rules.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Version of the settings format this reader understands.
pub const PARSER_VERSION: u8 = 1;

/// Optional field naming the lowest parser version a config requires.
pub const MINIMUM_VERSION_FIELD: &str = "MinimumVersion";

/// Outcome of a settings pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsReport {
    pub accepted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl SettingsReport {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.skipped.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Rejection {
    NotAnInteger,
    OutOfRange(i64),
    TooNew(u8),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger => {
                write!(f, "config has {} specified, but it is not an integer", MINIMUM_VERSION_FIELD)
            }
            Self::OutOfRange(version) => write!(
                f,
                "config has {} specified, but its required version ({}) is either too large or too small",
                MINIMUM_VERSION_FIELD, version
            ),
            Self::TooNew(version) => write!(
                f,
                "config requires parser version {}, but the current parser is version {}",
                version, PARSER_VERSION
            ),
        }
    }
}

/// Reads every settings file in a folder.
#[derive(Clone, Debug)]
pub struct SettingsReader {
    folder: PathBuf,
}

impl SettingsReader {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Conventional settings folder of `plugin` under a data directory.
    pub fn plugin_folder(data_dir: &Path, plugin: &str) -> PathBuf {
        data_dir.join("SKSE").join("Plugins").join(plugin)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Reads and validates every `*.json` file in the folder.
    ///
    /// A missing folder is not an error. Files that fail to parse or fail
    /// validation are skipped with a warning; only a failure to enumerate the
    /// folder itself is reported as an error.
    pub fn read(&self) -> LoadResult<SettingsReport> {
        tracing::info!("Reading JSON settings...");
        tracing::info!("  >Settings folder: {}.", self.folder.display());

        let mut report = SettingsReport::default();
        if !self.folder.exists() {
            tracing::info!("    >No settings folder found.");
            return Ok(report);
        }

        let entries = std::fs::read_dir(&self.folder).map_err(|e| {
            anyhow::anyhow!("Failed to list settings folder {}: {}", self.folder.display(), e)
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| anyhow::anyhow!("Failed to read settings entry: {}", e))?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        tracing::info!("    >Found {} configuration files.", paths.len());

        for path in paths {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::info!("    >Reading config {}...", name);

            match Self::read_config(&path) {
                Ok(()) => report.accepted.push(path),
                Err(err) => {
                    tracing::warn!("      >{}; config treated as invalid, skipping.", err);
                    report.skipped.push(path);
                }
            }
        }

        tracing::info!(
            accepted = report.accepted.len(),
            skipped = report.skipped.len(),
            "Finished reading all settings."
        );
        Ok(report)
    }

    fn read_config(path: &Path) -> LoadResult<()> {
        let content = read_file(path)?;
        let json: Value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON: {}", e))?;
        validate_minimum_version(&json).map_err(|rejection| anyhow::anyhow!("{}", rejection))
    }
}

fn validate_minimum_version(json: &Value) -> Result<(), Rejection> {
    let Some(field) = json.get(MINIMUM_VERSION_FIELD) else {
        return Ok(());
    };
    let required = field.as_i64().ok_or(Rejection::NotAnInteger)?;
    let required = u8::try_from(required)
        .ok()
        .filter(|&version| version >= 1)
        .ok_or(Rejection::OutOfRange(required))?;
    if required > PARSER_VERSION {
        return Err(Rejection::TooNew(required));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimum_version_rules() {
        assert_eq!(validate_minimum_version(&json!({})), Ok(()));
        assert_eq!(validate_minimum_version(&json!({ "MinimumVersion": 1 })), Ok(()));
        assert_eq!(
            validate_minimum_version(&json!({ "MinimumVersion": "1" })),
            Err(Rejection::NotAnInteger)
        );
        assert_eq!(
            validate_minimum_version(&json!({ "MinimumVersion": 1.5 })),
            Err(Rejection::NotAnInteger)
        );
        assert_eq!(
            validate_minimum_version(&json!({ "MinimumVersion": 0 })),
            Err(Rejection::OutOfRange(0))
        );
        assert_eq!(
            validate_minimum_version(&json!({ "MinimumVersion": 256 })),
            Err(Rejection::OutOfRange(256))
        );
        assert_eq!(
            validate_minimum_version(&json!({ "MinimumVersion": 2 })),
            Err(Rejection::TooNew(2))
        );
    }

    #[test]
    fn missing_folder_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let reader = SettingsReader::new(dir.path().join("absent"));
        assert_eq!(reader.read().unwrap(), SettingsReport::default());
    }

    #[test]
    fn reads_sorted_json_and_skips_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let folder = SettingsReader::plugin_folder(dir.path(), "Satchel");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("b.json"), r#"{ "MinimumVersion": 1 }"#).unwrap();
        std::fs::write(folder.join("a.json"), "{}").unwrap();
        std::fs::write(folder.join("c.json"), r#"{ "MinimumVersion": 9 }"#).unwrap();
        std::fs::write(folder.join("d.json"), "not json").unwrap();
        std::fs::write(folder.join("notes.txt"), "ignored").unwrap();

        let report = SettingsReader::new(&folder).read().unwrap();

        assert_eq!(report.accepted, vec![folder.join("a.json"), folder.join("b.json")]);
        assert_eq!(report.skipped, vec![folder.join("c.json"), folder.join("d.json")]);
        assert_eq!(report.total(), 4);
    }
}
