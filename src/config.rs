use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has an invalid value: {}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Json,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub store_backend: StoreBackend,
    pub users_file: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match lookup("PROFILE_STORE").as_deref().unwrap_or("json") {
            "json" => StoreBackend::Json,
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::Invalid { key: "PROFILE_STORE", value: other.to_string() }),
        };

        Ok(AppConfig {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            store_backend,
            users_file: lookup("USERS_FILE").unwrap_or_else(|| "users.json".to_string()),
            jwt_secret: required(&lookup, "JWT_SECRET")?,
            token_ttl_hours: parsed(&lookup, "TOKEN_TTL_HOURS", 168)?,
            bcrypt_cost: parsed(&lookup, "BCRYPT_COST", 10)?,
            gemini: GeminiConfig {
                api_key: required(&lookup, "GEMINI_API_KEY")?,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.5-flash".to_string()),
                base_url: lookup("GEMINI_BASE_URL")
                    .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
                timeout_secs: parsed(&lookup, "UPSTREAM_TIMEOUT_SECS", 30)?,
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
