//! Runtime configuration.

use std::env;
use std::path::PathBuf;

use crate::plugin::PLUGIN_NAME;

/// Where the runtime finds its data and how it presents itself to scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding the catalog, container and identity files.
    pub data_dir: PathBuf,
    /// Settings folder; defaults to `<data_dir>/SKSE/Plugins/<PLUGIN_NAME>`.
    pub settings_dir: Option<PathBuf>,
    /// Script name functions are bound under.
    pub script_name: String,
    /// Log directory; defaults to the platform data directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            settings_dir: None,
            script_name: PLUGIN_NAME.to_string(),
            log_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Build a config from `SATCHEL_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SATCHEL_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("SATCHEL_SETTINGS_DIR") {
            config.settings_dir = Some(dir);
        }
        if let Some(name) = read_env::<String>("SATCHEL_SCRIPT_NAME").filter(|name| !name.is_empty())
        {
            config.script_name = name;
        }
        if let Some(dir) = read_env::<PathBuf>("SATCHEL_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Settings folder after applying the default.
    pub fn resolved_settings_dir(&self) -> PathBuf {
        self.settings_dir.clone().unwrap_or_else(|| {
            satchel_content::SettingsReader::plugin_folder(&self.data_dir, PLUGIN_NAME)
        })
    }

    /// Log directory after applying the platform default.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "satchel")
                .map(|dirs| dirs.data_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
