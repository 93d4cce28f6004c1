use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("unsupported API url scheme {scheme:?}; expected http or https")]
    UnsupportedScheme { scheme: String },
    #[error("API base url {url:?} cannot carry a path")]
    OpaqueBaseUrl { url: String },
    #[error("unknown locale {0:?}; expected one of: en, ru")]
    UnknownLocale(String),
    #[error("failed to read settings file '{}': {source}", .path.display())]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
