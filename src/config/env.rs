use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub endpoint: Url,
    /// Sent as the `Origin` header so the classifier's CORS policy admits us.
    pub origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub color: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must use http or https, got `{scheme}`")]
    UnsupportedScheme { key: &'static str, scheme: String },
    #[error("{key} must be a boolean, got `{value}`")]
    InvalidFlag { key: &'static str, value: String },
}
