// openai-compatible chat completions transport

use crate::Error;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    api_key: Option<String>,
}

// what we send
#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

// what comes back
#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Reply,
}

#[derive(Deserialize)]
struct Reply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient {
    pub fn new(base_url: &str, api_prefix: &str, model: impl Into<String>) -> Self {
        let endpoint = format!(
            "{}{}/chat/completions",
            base_url.trim_end_matches('/'),
            api_prefix.trim_end_matches('/'),
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
            model: model.into(),
            temperature: 1.0,
            max_tokens: None,
            api_key: None,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as the only user message and returns the first
    /// choice's content, untouched. Null content reads as "".
    pub async fn complete(&self, prompt: &str) -> Result<String, Error> {
        let request = Request {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "sending chat completion");

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::Api { status, body });
        }

        let response: Response = response.json().await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(Error::EmptyResponse)?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
