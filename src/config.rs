use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub generate_questions_on_demand: bool,
    /// Deployment hint only; the question count is fixed at one per theme.
    pub min_questions_count: usize,
    pub image_generation_enabled: bool,
    pub static_base_url: String,
    pub static_dir: String,
    pub llm_timeout_secs: u64,
    pub access_token_expire_minutes: i64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            generate_questions_on_demand: get_env_bool("GENERATE_QUESTIONS_ON_DEMAND", false),
            min_questions_count: get_env_or("MIN_QUESTIONS_COUNT", 4),
            image_generation_enabled: get_env_bool("IMAGE_GENERATION_ENABLED", false),
            static_base_url: env::var("STATIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            llm_timeout_secs: get_env_or("LLM_TIMEOUT_SECS", 30),
            // 8 days
            access_token_expire_minutes: get_env_or("ACCESS_TOKEN_EXPIRE_MINUTES", 60 * 24 * 8),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => matches!(
            raw.to_ascii_lowercase().as_str(),
            "yes" | "true" | "t" | "1" | "on"
        ),
        Err(_) => default,
    }
}

fn get_env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
