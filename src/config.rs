pub mod args;
pub mod file;

use error_stack::{Result, ResultExt};
use url::Url;

use crate::utils::IntoReportExt;

use self::{args::TestMode, file::ConfigFile};

/// Overrides base URL from the config file.
pub const BASE_URL_ENV_VAR: &str = "CALCULATOR_API_BASE_URL";

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("File loading failed")]
    LoadFileError,
    #[error("Environment variable CALCULATOR_API_BASE_URL is not a valid URL")]
    InvalidEnvBaseUrl,
}

#[derive(Debug)]
pub struct Config {
    file: ConfigFile,
    base_url: Url,

    // Other configs
    test_mode: Option<TestMode>,
}

impl Config {
    /// Calculator service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn show_history_on_start(&self) -> bool {
        self.file
            .ui
            .clone()
            .unwrap_or_default()
            .show_history_on_start
    }

    /// Run QA tests instead of the interactive calculator.
    pub fn test_mode(&self) -> Option<TestMode> {
        self.test_mode.clone()
    }
}

pub fn get_config() -> Result<Config, GetConfigError> {
    let current_dir = std::env::current_dir().into_error(GetConfigError::GetWorkingDir)?;
    let file_config =
        file::ConfigFile::load(current_dir).change_context(GetConfigError::LoadFileError)?;
    let args_config = args::get_config();

    let base_url = resolve_base_url(
        &file_config,
        std::env::var(BASE_URL_ENV_VAR).ok(),
        args_config.base_url,
    )?;

    Ok(Config {
        file: file_config,
        base_url,
        test_mode: args_config.test_mode,
    })
}

/// Argument value, environment value and file value in priority order.
pub fn resolve_base_url(
    file_config: &ConfigFile,
    env_value: Option<String>,
    args_value: Option<Url>,
) -> Result<Url, GetConfigError> {
    if let Some(url) = args_value {
        return Ok(url);
    }

    match env_value.filter(|value| !value.trim().is_empty()) {
        Some(value) => Url::parse(value.trim())
            .into_error_with_info(GetConfigError::InvalidEnvBaseUrl, value),
        None => Ok(file_config.service.base_url.clone()),
    }
}
