use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ProviderConfig;

pub mod handlers;

/// Seam to the external language-model API so handlers and tests never
/// depend on the real network.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        model_name: &str,
        provider: &str,
    ) -> anyhow::Result<String>;

    async fn list_models(&self) -> anyhow::Result<Value>;
}

const MAX_TOKENS: u32 = 500;

/// HTTP client for the Metis chat-completion wrapper API.
pub struct MetisClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MetisClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .context("OpenAI API key not configured")
    }
}

#[async_trait]
impl ModelClient for MetisClient {
    async fn complete(
        &self,
        prompt: &str,
        model_name: &str,
        provider: &str,
    ) -> anyhow::Result<String> {
        let key = self.key()?;
        let url = format!("{}/wrapper/{}/chat/completions", self.base_url, provider);
        let response = self
            .http
            .post(&url)
            .bearer_auth(key)
            .timeout(std::time::Duration::from_secs(30))
            .json(&json!({
                "model": model_name,
                "messages": [{ "role": "user", "content": prompt }],
                "max_tokens": MAX_TOKENS,
            }))
            .send()
            .await
            .context("provider request failed")?
            .error_for_status()
            .context("provider returned an error status")?;

        let body: Value = response.json().await.context("provider response body")?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .context("provider response missing completion text")?
            .to_string();
        debug!(model = model_name, chars = content.len(), "completion received");
        Ok(content)
    }

    async fn list_models(&self) -> anyhow::Result<Value> {
        let key = self.key()?;
        let url = format!("{}/meta", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .context("provider request failed")?
            .error_for_status()
            .context("provider returned an error status")?;
        Ok(response.json().await.context("provider response body")?)
    }
}

/// Canned client for unit tests; echoes a fixed completion.
pub struct FakeModel;

#[async_trait]
impl ModelClient for FakeModel {
    async fn complete(
        &self,
        _prompt: &str,
        _model_name: &str,
        _provider: &str,
    ) -> anyhow::Result<String> {
        Ok("fake completion".into())
    }

    async fn list_models(&self) -> anyhow::Result<Value> {
        Ok(json!({ "models": [] }))
    }
}
