use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Without a URL the server keeps requests in memory.
    pub url: Option<String>,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: None, run_migrations: true }
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct AdminConfig {
    pub password: Option<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

#[derive(Deserialize, Clone)]
pub struct NotificationConfig {
    /// Operator address that receives booking emails; unset disables them.
    pub recipient: Option<String>,
    #[serde(default = "default_from")]
    pub from: String,
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            recipient: None,
            from: default_from(),
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("recipient", &self.recipient.as_ref().map(moments_shared::Masked))
            .field("from", &self.from)
            .field("api_key", &self.api_key.as_ref().map(|_| "********"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_true() -> bool { true }

fn default_from() -> String { "Moments <onboarding@resend.dev>".to_string() }

fn default_base_url() -> String { "https://api.resend.com".to_string() }

/// Unprefixed variable names accepted for deployments that predate the
/// `MOMENTS__` scheme.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("admin.password", "ADMIN_PASSWORD"),
    ("notification.recipient", "NOTIFICATION_EMAIL"),
    ("notification.api_key", "RESEND_API_KEY"),
    ("database.url", "DATABASE_URL"),
];

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment and local overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MOMENTS__ADMIN__PASSWORD=secret` sets `admin.password`
            .add_source(config::Environment::with_prefix("MOMENTS").separator("__"));

        for (key, var) in LEGACY_ENV {
            builder = builder.set_override_option(*key, env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn from_toml(raw: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
