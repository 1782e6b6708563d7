use std::env;

use url::Url;

use super::env::{
    AppConfig, ClassifierConfig, ConfigError, DirectoryConfig, LoggingConfig, UiConfig,
};

pub const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:8000/predict/";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    /// Builds the config from any key lookup; `load_config` feeds it the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_endpoint = lookup("CLASSIFIER_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_string());
        let endpoint = parse_endpoint("CLASSIFIER_URL", raw_endpoint.trim())?;

        let origin = match lookup("COMPOSER_ORIGIN") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => Some(DEFAULT_ORIGIN.to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: lookup("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let ui = UiConfig {
            color: match lookup("COMPOSER_COLOR") {
                Some(value) => parse_flag("COMPOSER_COLOR", &value)?,
                None => true,
            },
        };

        Ok(Self {
            classifier: ClassifierConfig { endpoint, origin },
            directories,
            logging,
            ui,
        })
    }
}

fn parse_endpoint(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { key, source })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            key,
            scheme: url.scheme().to_string(),
        });
    }
    Ok(url)
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_classifier() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.classifier.endpoint.as_str(), DEFAULT_CLASSIFIER_URL);
        assert_eq!(config.classifier.origin.as_deref(), Some(DEFAULT_ORIGIN));
        assert_eq!(config.directories.logs_dir, "logs");
        assert_eq!(config.logging.level, "info");
        assert!(config.ui.color);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("CLASSIFIER_URL", "https://spam.example.com/predict/"),
            ("COMPOSER_ORIGIN", ""),
            ("COMPOSER_COLOR", "off"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(
            config.classifier.endpoint.as_str(),
            "https://spam.example.com/predict/"
        );
        assert!(config.classifier.origin.is_none());
        assert!(!config.ui.color);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn rejects_bad_endpoint() {
        assert!(matches!(
            config_from(&[("CLASSIFIER_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("CLASSIFIER_URL", "ftp://127.0.0.1/predict/")]),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn rejects_bad_color_flag() {
        assert!(matches!(
            config_from(&[("COMPOSER_COLOR", "sometimes")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
