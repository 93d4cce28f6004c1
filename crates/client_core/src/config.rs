use std::{collections::HashMap, fs, io, path::Path};

use url::Url;

use crate::{error::ClientError, locale::Locale};

pub const SETTINGS_FILE: &str = "chat_form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub locale: Locale,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".into(),
            locale: Locale::En,
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `chat_form.toml` in the working directory, then the process
/// environment.
pub fn load_settings() -> Result<Settings, ClientError> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ClientError> {
    let mut settings = Settings::default();
    apply_file(&mut settings, path)?;
    apply_env(&mut settings, var)?;
    Ok(settings)
}

/// Overrides from a flat `key = "value"` TOML file. A missing file is not an
/// error.
pub fn apply_file(settings: &mut Settings, path: &Path) -> Result<(), ClientError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(ClientError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let file_cfg =
        toml::from_str::<HashMap<String, String>>(&raw).map_err(|source| {
            ClientError::SettingsParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

    if let Some(v) = file_cfg.get("api_base_url") {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("locale") {
        settings.locale = v.parse()?;
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

pub fn apply_env(
    settings: &mut Settings,
    var: impl Fn(&str) -> Option<String>,
) -> Result<(), ClientError> {
    if let Some(v) = var("CHAT_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = var("APP__LOCALE") {
        settings.locale = v.parse()?;
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    Ok(())
}

/// Parses and checks the API base url; only http and https are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim()).map_err(|source| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
