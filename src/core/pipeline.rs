// classify, then block or generate

use std::fmt;
use tracing::info;

use super::{Classifier, Responder};
use crate::Error;

pub const BLOCK_MESSAGE: &str = "This query violates safety guidelines. Blocked";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Blocked,
    Generated(String),
}

impl Outcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Outcome::Blocked)
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Blocked => BLOCK_MESSAGE,
            Outcome::Generated(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Outcome::Blocked => BLOCK_MESSAGE.to_string(),
            Outcome::Generated(text) => text,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

pub struct Pipeline<C, R> {
    guardian: C,
    generator: R,
}

impl<C: Classifier, R: Responder> Pipeline<C, R> {
    pub fn new(guardian: C, generator: R) -> Self {
        Self {
            guardian,
            generator,
        }
    }

    pub fn guardian(&self) -> &C {
        &self.guardian
    }

    pub fn generator(&self) -> &R {
        &self.generator
    }

    /// Runs one query to a terminal outcome.
    ///
    /// The generator is only reached after the guardian answered safe. A
    /// guardian error ends the run right there.
    pub async fn run(&self, query: &str) -> Result<Outcome, Error> {
        info!(query, "checking risk");

        let verdict = self.guardian.classify(query).await?;
        if verdict.is_risky() {
            info!("risk detected, query blocked");
            return Ok(Outcome::Blocked);
        }

        info!("query is safe, forwarding to llm");
        let text = self.generator.generate(query).await?;
        Ok(Outcome::Generated(text))
    }

    pub async fn process(&self, query: &str) -> Result<String, Error> {
        Ok(self.run(query).await?.into_text())
    }
}
