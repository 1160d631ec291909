use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::path::PathBuf;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::store::FileStore;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    /// 0 lets the OS pick a free port (tests)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Signs the flash-message cookies. Must be at least 64 bytes.
    pub hmac_secret: Secret<String>,
}

/// Where subscription records are appended. Relative paths resolve against
/// the process working directory.
#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    pub directory: PathBuf,
    pub file_name: String,
}

impl StoreSettings {
    pub fn file_store(&self) -> FileStore { FileStore::new(&self.directory, &self.file_name) }
}

#[derive(Debug)]
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
            e => Err(format!("{e} is not a supported environment; use `local` or `production`")),
        }
    }
}

/// Load yaml configuration files at `<cwd>/configuration`: `base.yaml`, then
/// `{APP_ENVIRONMENT}.yaml` (default `local`), then `APP_`-prefixed env vars.
///
/// All fields must be present after layering, otherwise initialisation fails
/// immediately and the server does not start.
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
            // env vars are -always- parsed as String, hence `serde-aux` for the
            // port. e.g.:
            //
            // `APP_APPLICATION__PORT=5001` -> `Settings.application.port`
            // `APP_STORE__DIRECTORY=/var/lib/offside` -> `Settings.store.directory`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
