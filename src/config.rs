//! Environment-driven configuration.
//!
//! Values are read from the process environment after `.env` has been loaded
//! with `dotenvy`. Parsing goes through a lookup closure so tests never touch
//! the real environment.

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3005;
const DEFAULT_STATIC_DIR: &str = "/var/www/pdf/pdf-frontend/dist";
const DEFAULT_LOCAL_STORAGE_DIR: &str = "./generated";
const DEFAULT_VAT_PERCENT: u32 = 15;
const DEFAULT_LOGO_URL: &str = "https://krishnadas-test-1.s3.ap-south-1.amazonaws.com/logo.png";
const DEFAULT_SEAL_URL: &str = "https://krishnadas-test-1.s3.ap-south-1.amazonaws.com/seal.png";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct S3Settings {
    pub region: String,
    pub bucket: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageSettings {
    S3(S3Settings),
    Local {
        dir: PathBuf,
        public_base_url: String,
    },
}

/// Knobs that shape the generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationSettings {
    pub vat_percent: u32,
    pub logo_url: String,
    pub seal_url: String,
}

impl Default for QuotationSettings {
    fn default() -> Self {
        Self {
            vat_percent: DEFAULT_VAT_PERCENT,
            logo_url: DEFAULT_LOGO_URL.to_string(),
            seal_url: DEFAULT_SEAL_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeSettings {
    pub path: Option<PathBuf>,
    pub no_sandbox: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub storage: StorageSettings,
    pub quotation: QuotationSettings,
    pub chrome: ChromeSettings,
    /// Empty means any origin is accepted.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value,
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        let backend = get("STORAGE_BACKEND").unwrap_or_else(|| "s3".to_string());
        let storage = match backend.trim().to_ascii_lowercase().as_str() {
            "s3" => StorageSettings::S3(S3Settings {
                region: get("AWS_REGION").ok_or(ConfigError::Missing("AWS_REGION"))?,
                bucket: get("AWS_BUCKET_NAME").ok_or(ConfigError::Missing("AWS_BUCKET_NAME"))?,
                access_key: get("AWS_ACCESS_KEY"),
                secret_key: get("AWS_SECRET_KEY"),
            }),
            "local" => StorageSettings::Local {
                dir: PathBuf::from(
                    get("LOCAL_STORAGE_DIR").unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_DIR.into()),
                ),
                public_base_url: get("PUBLIC_BASE_URL")
                    .unwrap_or_else(|| format!("http://localhost:{}/files", port))
                    .trim_end_matches('/')
                    .to_string(),
            },
            _ => {
                return Err(ConfigError::Invalid {
                    key: "STORAGE_BACKEND",
                    value: backend,
                    reason: "expected 's3' or 'local'".to_string(),
                })
            }
        };

        let vat_percent = match get("VAT_PERCENT") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(pct) if pct <= 100 => pct,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "VAT_PERCENT",
                        value,
                        reason: "expected a whole percentage between 0 and 100".to_string(),
                    })
                }
            },
            None => DEFAULT_VAT_PERCENT,
        };

        let no_sandbox = match get("CHROME_NO_SANDBOX") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                key: "CHROME_NO_SANDBOX",
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?,
            None => false,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            storage,
            quotation: QuotationSettings {
                vat_percent,
                logo_url: get("LOGO_URL").unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),
                seal_url: get("SEAL_URL").unwrap_or_else(|| DEFAULT_SEAL_URL.to_string()),
            },
            chrome: ChromeSettings {
                path: get("CHROME_PATH").map(PathBuf::from),
                no_sandbox,
            },
            cors_allowed_origins,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
