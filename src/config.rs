use crate::errors::AppError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_SAFE_BROWSING_BASE_URL: &str = "https://safebrowsing.googleapis.com";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub safe_browsing_api_key: String,
    pub safe_browsing_base_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// `None` means any origin is allowed.
    pub allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            non_empty(key).ok_or_else(|| AppError::EnvError(format!("{key} must be set")))
        };

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = non_empty("ALLOWED_ORIGINS").map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            port,
            database_url: non_empty("DATABASE_URL"),
            safe_browsing_api_key: required("SAFE_BROWSING_API_KEY")?,
            safe_browsing_base_url: non_empty("SAFE_BROWSING_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SAFE_BROWSING_BASE_URL.to_string()),
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: non_empty("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_keys_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("SAFE_BROWSING_API_KEY", "sb"),
            ("GEMINI_API_KEY", "gm"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert!(config.database_url.is_none());
        assert!(config.allowed_origins.is_none());
    }

    #[test]
    fn missing_api_key_is_an_env_error() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "gm")])).unwrap_err();
        assert!(matches!(err, AppError::EnvError(msg) if msg.contains("SAFE_BROWSING_API_KEY")));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("SAFE_BROWSING_API_KEY", "sb"),
            ("GEMINI_API_KEY", "gm"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "chrome-extension://abc, http://localhost:3000,"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins.unwrap(),
            vec!["chrome-extension://abc", "http://localhost:3000"]
        );
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("SAFE_BROWSING_API_KEY", "sb"),
            ("GEMINI_API_KEY", "gm"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::EnvError(_)));
    }
}
