// endpoint settings for the two models

use crate::Error;

pub const GUARDIAN_MODEL: &str = "granite-guardian";
pub const LLM_MODEL: &str = "llm";
pub const API_PREFIX: &str = "/openai/v1";

// both models run near-deterministic
pub const TEMPERATURE: f32 = 0.01;
pub const MAX_TOKENS: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub guardian_url: String,
    pub guardian_model: String,
    pub llm_url: String,
    pub llm_model: String,
    pub api_prefix: String,
    pub api_key: Option<String>,
}

impl Config {
    /// Builds a config with default model names and api prefix.
    ///
    /// Fails before anything touches the network if either endpoint is
    /// missing or empty; the error lists every missing variable.
    pub fn resolve(guardian_url: Option<String>, llm_url: Option<String>) -> Result<Self, Error> {
        let guardian_url = guardian_url.filter(|u| !u.trim().is_empty());
        let llm_url = llm_url.filter(|u| !u.trim().is_empty());

        let mut missing = Vec::new();
        if guardian_url.is_none() {
            missing.push("GUARDIAN_URL");
        }
        if llm_url.is_none() {
            missing.push("LLM_URL");
        }

        match (guardian_url, llm_url) {
            (Some(guardian_url), Some(llm_url)) => Ok(Self {
                guardian_url,
                guardian_model: GUARDIAN_MODEL.to_string(),
                llm_url,
                llm_model: LLM_MODEL.to_string(),
                api_prefix: API_PREFIX.to_string(),
                api_key: None,
            }),
            _ => Err(Error::MissingConfig(missing)),
        }
    }

    pub fn with_models(mut self, guardian: impl Into<String>, llm: impl Into<String>) -> Self {
        self.guardian_model = guardian.into();
        self.llm_model = llm.into();
        self
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.is_empty());
        self
    }
}
