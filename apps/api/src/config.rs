use thiserror::Error;

const DEFAULT_PORT: u16 = 5161;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Frontend origins allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:3000",
    "https://*.onrender.com",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("Environment variable '{key}' is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Deployment flavour. Development turns on the OpenAPI document and HTTPS redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    pub fn is_development(self) -> bool {
        self == AppEnvironment::Development
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the provider key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
    pub environment: AppEnvironment,
    pub allowed_origins: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY")
            .or_else(|| get("OpenAI__ApiKey"))
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: format!("'{raw}' is not a valid port number ({e})"),
            })?,
            None => DEFAULT_PORT,
        };

        let environment = match get("APP_ENV") {
            Some(raw) => parse_environment(&raw)?,
            None => AppEnvironment::Production,
        };

        let allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port,
            environment,
            allowed_origins,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_environment(raw: &str) -> Result<AppEnvironment, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Ok(AppEnvironment::Development),
        "production" | "prod" => Ok(AppEnvironment::Production),
        other => Err(ConfigError::Invalid {
            key: "APP_ENV",
            reason: format!("expected 'development' or 'production', got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = load(&[("PORT", "8080")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let err = load(&[("OPENAI_API_KEY", "   ")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OPENAI_API_KEY"));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.port, 5161);
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.allowed_origins.len(), 4);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_dotnet_style_key_is_accepted() {
        let config = load(&[("OpenAI__ApiKey", "sk-alias")]).unwrap();
        assert_eq!(config.openai_api_key, "sk-alias");
    }

    #[test]
    fn test_port_override_and_invalid_port() {
        let config = load(&[("OPENAI_API_KEY", "k"), ("PORT", "9000")]).unwrap();
        assert_eq!(config.port, 9000);

        let err = load(&[("OPENAI_API_KEY", "k"), ("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_environment_flag() {
        let config = load(&[("OPENAI_API_KEY", "k"), ("APP_ENV", "Development")]).unwrap();
        assert!(config.environment.is_development());

        let err = load(&[("OPENAI_API_KEY", "k"), ("APP_ENV", "staging")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "APP_ENV", .. }));
    }

    #[test]
    fn test_origin_list_override_and_base_url_trailing_slash() {
        let config = load(&[
            ("OPENAI_API_KEY", "k"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9999/v1/"),
        ])
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.openai_base_url, "http://127.0.0.1:9999/v1");
    }
}
