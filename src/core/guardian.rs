// guardian model - labels a query risky or safe

use async_trait::async_trait;
use tracing::{info, warn};

use super::ChatClient;
use crate::config::{Config, TEMPERATURE};
use crate::Error;

const RISKY_LABEL: &str = "yes";
const SAFE_LABEL: &str = "no";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Risky,
    Safe,
}

impl Verdict {
    /// Reads the guardian's raw reply.
    ///
    /// Only an exact "yes" (after trim + lowercase) is risky. Every other
    /// reply is safe, including garbage and empty text, so a misbehaving
    /// guardian fails open. Off-vocabulary labels are logged at warn.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();

        if label == RISKY_LABEL {
            return Verdict::Risky;
        }

        if label != SAFE_LABEL {
            warn!(label = %label, "unexpected guardian label, treating as safe");
        }

        Verdict::Safe
    }

    pub fn is_risky(self) -> bool {
        self == Verdict::Risky
    }
}

/// First stage of the pipeline.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, query: &str) -> Result<Verdict, Error>;
}

pub struct Guardian {
    chat: ChatClient,
}

impl Guardian {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    pub fn from_config(config: &Config) -> Self {
        let chat = ChatClient::new(
            &config.guardian_url,
            &config.api_prefix,
            config.guardian_model.clone(),
        )
        .temperature(TEMPERATURE)
        .api_key(config.api_key.clone());

        Self::new(chat)
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }
}

#[async_trait]
impl Classifier for Guardian {
    async fn classify(&self, query: &str) -> Result<Verdict, Error> {
        let label = self.chat.complete(query).await?;
        let verdict = Verdict::from_label(&label);
        info!(?verdict, "guardian verdict");
        Ok(verdict)
    }
}
