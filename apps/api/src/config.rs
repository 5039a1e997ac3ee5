use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub questions_per_interview: usize,
    pub llm_timeout_secs: u64,
    pub max_sessions: usize,
    pub max_upload_bytes: usize,
    pub practice_goal_score: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            questions_per_interview: parse_env("QUESTIONS_PER_INTERVIEW", 5)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            max_sessions: parse_env("MAX_SESSIONS", 1000)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
            practice_goal_score: parse_env("PRACTICE_GOAL_SCORE", 90)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.questions_per_interview) {
            bail!(
                "QUESTIONS_PER_INTERVIEW must be between 1 and 10, got {}",
                self.questions_per_interview
            );
        }
        if self.max_sessions == 0 {
            bail!("MAX_SESSIONS must be at least 1");
        }
        if self.practice_goal_score > 100 {
            bail!("PRACTICE_GOAL_SCORE must be at most 100");
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by router and handler tests.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            questions_per_interview: 2,
            llm_timeout_secs: 5,
            max_sessions: 8,
            max_upload_bytes: 64 * 1024,
            practice_goal_score: 90,
        }
    }
}
