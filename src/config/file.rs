use std::{
    io::Write,
    path::{Path, PathBuf},
};

use error_stack::{Report, Result, ResultExt};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::IntoReportExt;

pub const CONFIG_FILE_NAME: &str = "client_config.toml";

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r#"

[service]
# Environment variable CALCULATOR_API_BASE_URL and argument --url override this.
base_url = "http://localhost:5000"

[ui]
show_history_on_start = true
"#;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Save default")]
    SaveDefault,
    #[error("Not a directory")]
    NotDirectory,
    #[error("Load config file")]
    LoadConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    pub service: ServiceConfig,
    pub ui: Option<UiConfig>,
}

impl ConfigFile {
    pub fn save_default(dir: impl AsRef<Path>) -> Result<(), ConfigFileError> {
        let file_path =
            Self::default_config_file_path(dir).change_context(ConfigFileError::SaveDefault)?;
        let mut file = std::fs::File::create(file_path).into_error(ConfigFileError::SaveDefault)?;
        file.write_all(DEFAULT_CONFIG_FILE_TEXT.as_bytes())
            .into_error(ConfigFileError::SaveDefault)?;
        Ok(())
    }

    /// Creates the file with default values if it does not exist.
    pub fn load(dir: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let file_path =
            Self::default_config_file_path(&dir).change_context(ConfigFileError::LoadConfig)?;
        if !file_path.exists() {
            Self::save_default(dir).change_context(ConfigFileError::LoadConfig)?;
        }

        let config_string =
            std::fs::read_to_string(&file_path).into_error(ConfigFileError::LoadConfig)?;
        toml::from_str(&config_string)
            .into_error_with_info(ConfigFileError::LoadConfig, file_path.display().to_string())
    }

    pub fn default_config_file_path(dir: impl AsRef<Path>) -> Result<PathBuf, ConfigFileError> {
        if !dir.as_ref().is_dir() {
            return Err(Report::new(ConfigFileError::NotDirectory));
        }
        Ok(dir.as_ref().join(CONFIG_FILE_NAME))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    pub base_url: Url,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    pub show_history_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_history_on_start: true,
        }
    }
}
