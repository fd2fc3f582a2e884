// generation model - answers queries the guardian let through

use async_trait::async_trait;

use super::ChatClient;
use crate::config::{Config, MAX_TOKENS, TEMPERATURE};
use crate::Error;

/// Second stage of the pipeline.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn generate(&self, query: &str) -> Result<String, Error>;
}

pub struct Generator {
    chat: ChatClient,
}

impl Generator {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    pub fn from_config(config: &Config) -> Self {
        let chat = ChatClient::new(&config.llm_url, &config.api_prefix, config.llm_model.clone())
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .api_key(config.api_key.clone());

        Self::new(chat)
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }
}

#[async_trait]
impl Responder for Generator {
    async fn generate(&self, query: &str) -> Result<String, Error> {
        let text = self.chat.complete(query).await?;
        Ok(text.trim().to_string())
    }
}
