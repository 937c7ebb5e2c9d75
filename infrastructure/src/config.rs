use shared::error::ConfigError;
use std::env;
use std::fmt;
use std::path::Path;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const PG_VECTOR_COLLECTION_NAME: &str = "PG_VECTOR_COLLECTION_NAME";
pub const OPENAI_EMBEDDING_MODEL: &str = "OPENAI_EMBEDDING_MODEL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

/// Checked in this order; the first one missing is reported.
pub const REQUIRED_VARS: [&str; 3] = [OPENAI_API_KEY, DATABASE_URL, PG_VECTOR_COLLECTION_NAME];

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const CHAT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub database_url: String,
    pub collection_name: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub openai_base_url: String,
    /// Stored vector metadata is JSONB rather than legacy JSON.
    pub use_jsonb: bool,
}

impl Config {
    /// Load `.env` if there is one, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Like [`Config::load`] but with an explicit env file, which must exist. Its values win
    /// over variables already set in the process.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path_override(path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        for key in REQUIRED_VARS {
            if value(key).is_none() {
                return Err(ConfigError::MissingVar(key));
            }
        }

        let required = |key: &'static str| value(key).ok_or(ConfigError::MissingVar(key));

        Ok(Self {
            openai_api_key: required(OPENAI_API_KEY)?,
            database_url: required(DATABASE_URL)?,
            collection_name: required(PG_VECTOR_COLLECTION_NAME)?,
            embedding_model: value(OPENAI_EMBEDDING_MODEL)
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            chat_model: CHAT_MODEL.to_string(),
            openai_base_url: value(OPENAI_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            use_jsonb: true,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("collection_name", &self.collection_name)
            .field("embedding_model", &self.embedding_model)
            .field("chat_model", &self.chat_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("use_jsonb", &self.use_jsonb)
            .finish()
    }
}
