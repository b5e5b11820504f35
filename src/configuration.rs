use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::StaffMailboxes;
use crate::email_client::EmailClient;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub mailboxes: StaffMailboxes,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    /// 0 lets the OS pick a free port (used by the test suite)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Directory holding the page templates and their layout
    pub templates_dir: String,

    /// Directory whose contents are served as-is (css, images, js)
    pub public_dir: String,

    /// Largest inquiry body accepted, in either encoding
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub form_limit_bytes: usize,
}

/// Mailjet configuration. Both halves of the API key pair are kept as
/// `Secret`s so they never end up in logs.
#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub api_key_public: Secret<String>,
    pub api_key_private: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }

    pub fn client(&self) -> Result<EmailClient, reqwest::Error> {
        EmailClient::new(
            self.base_url.clone(),
            self.api_key_public.clone(),
            self.api_key_private.clone(),
            self.timeout(),
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{APP_ENVIRONMENT}.yaml` (default `local`), then `APP_*`
/// env vars.
///
/// All fields must be present after merging, otherwise initialisation fails
/// and the server does not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` on numeric fields.
            //
            // `APP_APPLICATION__PORT=5001` -> `Settings.application.port`
            // `APP_EMAIL_CLIENT__API_KEY_PRIVATE=...` -> `Settings.email_client.api_key_private`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
