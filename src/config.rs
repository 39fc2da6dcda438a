use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub pinecone: PineconeConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub frontend_dir: String,
    pub static_dir: String,
}

#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    pub environment: String,
    pub index_name: String,
    /// Data-plane host; resolved through the controller when unset
    pub index_host: Option<String>,
    pub controller_url: Option<String>,
}

// Keys stay out of the logs.
impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl std::fmt::Debug for PineconeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PineconeConfig")
            .field("api_key", &"***")
            .field("environment", &self.environment)
            .field("index_name", &self.index_name)
            .field("index_host", &self.index_host)
            .field("controller_url", &self.controller_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("{} must be set", key))
        };

        let port = match lookup("PORT").filter(|value| !value.is_empty()) {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                port,
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                frontend_dir: lookup("FRONTEND_DIR")
                    .unwrap_or_else(|| "pinecone-crud/out".to_string()),
                static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            },
            openai: OpenAIConfig {
                api_key: required("OPENAI_API_KEY")?,
                base_url: lookup("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            },
            pinecone: PineconeConfig {
                api_key: required("PINECONE_API_KEY")?,
                environment: required("PINECONE_ENVIRONMENT")?,
                index_name: required("PINECONE_INDEX_NAME")?,
                index_host: lookup("PINECONE_INDEX_HOST"),
                controller_url: lookup("PINECONE_CONTROLLER_URL"),
            },
        })
    }
}
