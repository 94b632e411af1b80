//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_LOGIN_PATH;

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Account the command-line front end logs in with before running a command.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings of the desk front end.
pub struct DeskConfig {
    /// Origin of the backend API, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    /// Where a `401` sends the user.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Glob of templates overriding the built-in ones.
    #[serde(default)]
    pub templates_dir: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

#[cfg(feature = "client")]
mod loader {
    use std::path::Path;

    use config::{Config, ConfigError, Environment, File};

    use super::DeskConfig;

    pub(super) fn build(
        dir: &Path,
        app_env: &str,
        environment: Environment,
    ) -> Result<DeskConfig, ConfigError> {
        let settings = Config::builder()
            // Add `{dir}/default.yaml`
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            // Add environment-specific overrides
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(environment)
            .build()?;

        settings.try_deserialize::<DeskConfig>()
    }

    pub(super) fn app_environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

/// Loads `default.yaml`, then `{app_env}.yaml`, then `APP_*` variables.
///
/// Nested keys use a double underscore: `APP_CREDENTIALS__EMAIL`.
#[cfg(feature = "client")]
pub fn load_config(dir: &std::path::Path, app_env: &str) -> Result<DeskConfig, config::ConfigError> {
    loader::build(dir, app_env, loader::app_environment())
}

#[cfg(all(test, feature = "client"))]
mod tests {
    use std::fs;

    use config::Map;

    use super::*;

    const DEFAULT_YAML: &str = "api_base_url: http://localhost:8000\n";

    #[test]
    fn defaults_fill_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();

        let config = loader::build(
            dir.path(),
            "local",
            loader::app_environment().source(Some(Map::new())),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.credentials, None);
    }

    #[test]
    fn profile_and_environment_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();
        fs::write(
            dir.path().join("staging.yaml"),
            "api_base_url: https://staging.example.com\nrequest_timeout_secs: 5\n",
        )
        .unwrap();
        let env = Map::from([
            ("APP_REQUEST_TIMEOUT_SECS".to_string(), "12".to_string()),
            ("APP_CREDENTIALS__EMAIL".to_string(), "admin@example.com".to_string()),
            ("APP_CREDENTIALS__PASSWORD".to_string(), "secret".to_string()),
        ]);

        let config = loader::build(
            dir.path(),
            "staging",
            loader::app_environment().source(Some(env)),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://staging.example.com");
        assert_eq!(config.request_timeout_secs, 12);
        assert_eq!(
            config.credentials,
            Some(Credentials {
                email: "admin@example.com".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path(), "local").is_err());
    }
}
