use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::features::auth::dtos::LoginField;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub credentials: Option<CredentialsConfig>,
}

/// Remote directory API settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin every endpoint path is appended to (no trailing slash)
    pub base_url: String,
    pub request_timeout: Duration,
    /// Which identifier the backend's `/login` expects next to the password
    pub login_field: LoginField,
}

/// Local durable state: the session file and the fallback snapshot cache
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub session_file: PathBuf,
    pub cache_file: PathBuf,
}

/// Optional credentials used by the binary to establish a session on startup
#[derive(Debug, Clone)]
pub struct CredentialsConfig {
    pub identifier: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            credentials: CredentialsConfig::from_env(),
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str =
        "https://paleturquoise-tarsier-726492.hostingersite.com/api";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("DALIL_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err("DALIL_API_BASE_URL must not be empty".to_string());
        }

        let request_timeout_secs = env::var("DALIL_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DALIL_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        let login_field = env::var("DALIL_LOGIN_FIELD")
            .unwrap_or_else(|_| "email".to_string())
            .parse::<LoginField>()?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            login_field,
        })
    }

    /// Settings pointing at an arbitrary origin, mostly for tests and tooling
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
            login_field: LoginField::Email,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let session_file = env::var("DALIL_SESSION_FILE")
            .unwrap_or_else(|_| ".dalil/session.json".to_string());
        let cache_file =
            env::var("DALIL_CACHE_FILE").unwrap_or_else(|_| ".dalil/cache.json".to_string());

        if session_file == cache_file {
            return Err("DALIL_SESSION_FILE and DALIL_CACHE_FILE must differ".to_string());
        }

        Ok(Self {
            session_file: PathBuf::from(session_file),
            cache_file: PathBuf::from(cache_file),
        })
    }
}

impl CredentialsConfig {
    /// Only present when both values are set and non-empty
    pub fn from_env() -> Option<Self> {
        let identifier = env::var("DALIL_LOGIN_IDENTIFIER")
            .ok()
            .filter(|s| !s.is_empty())?;
        let password = env::var("DALIL_LOGIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())?;

        Some(Self {
            identifier,
            password,
        })
    }
}
