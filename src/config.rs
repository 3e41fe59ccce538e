use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "127.0.0.1:8080";
pub const DEFAULT_EXPORT_DIR: &str = "generated_cvs";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has unsupported value `{value}`")]
    InvalidValue { name: &'static str, value: String },

    #[error("{0} must be set when CLIENT_STORE=redis")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientStoreConfig {
    Memory,
    Redis { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvExporterConfig {
    Log,
    JsonFile { dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_url: String,
    pub client_store: ClientStoreConfig,
    pub cv_exporter: CvExporterConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url = lookup("SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let client_store = match lookup("CLIENT_STORE").as_deref() {
            None | Some("memory") => ClientStoreConfig::Memory,
            Some("redis") => ClientStoreConfig::Redis {
                url: lookup("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "CLIENT_STORE",
                    value: other.to_string(),
                })
            }
        };

        let cv_exporter = match lookup("CV_EXPORTER").as_deref() {
            None | Some("log") => CvExporterConfig::Log,
            Some("json") => CvExporterConfig::JsonFile {
                dir: lookup("CV_EXPORT_DIR")
                    .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string())
                    .into(),
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "CV_EXPORTER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            server_url,
            client_store,
            cv_exporter,
        })
    }
}
