use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::JournalError;
use crate::lexicon::{KeywordList, TextClassifier};
use crate::models::ReflectionResult;
use crate::safety::{SafetyGate, SAFETY_MESSAGE};

/// Shown in place of a reflection when the provider fails, times out or
/// returns nothing usable.
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble processing your entry right now. Please try again later.";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A text-generation backend: one prompt in, plain text out.
pub trait TextProvider {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are an empathetic diary assistant. Analyze this journal entry and provide a concise, supportive response with:

1. **Summary** (1-2 sentences): Brief overview of what happened
2. **Mood** (1 word + brief explanation): Current emotional state
3. **Insight** (1-2 sentences): A gentle observation or pattern you notice
4. **Question** (1 question): A thoughtful follow-up to encourage deeper reflection

Keep your response warm, concise, and under 150 words total.

Entry: "{text}"

Format your response clearly and be encouraging."#
    )
}

pub struct ReflectionGenerator<P, C = KeywordList> {
    provider: P,
    safety: SafetyGate<C>,
    timeout: Duration,
}

impl<P: TextProvider> ReflectionGenerator<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self::with_safety(provider, SafetyGate::default(), timeout)
    }
}

impl<P: TextProvider, C: TextClassifier> ReflectionGenerator<P, C> {
    pub fn with_safety(provider: P, safety: SafetyGate<C>, timeout: Duration) -> Self {
        Self {
            provider,
            safety,
            timeout,
        }
    }

    /// Flagged text gets the fixed safety message and never reaches the
    /// provider. Everything else is best effort: any provider failure turns
    /// into [`FALLBACK_MESSAGE`].
    pub async fn reflect(&self, text: &str) -> ReflectionResult {
        if self.safety.is_concerning(text) {
            warn!("safety keywords found in entry, skipping text provider");
            return ReflectionResult::SafetyConcern(SAFETY_MESSAGE.to_string());
        }

        let prompt = build_prompt(text);
        let outcome = tokio::time::timeout(self.timeout, self.provider.generate(&prompt)).await;

        let body = match outcome {
            Ok(Ok(body)) => body,
            Ok(Err(err)) => {
                warn!(error = %err, "text provider failed, using fallback reflection");
                return fallback();
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    "text provider timed out, using fallback reflection"
                );
                return fallback();
            }
        };

        let body = body.trim();
        if body.is_empty() {
            warn!("text provider returned an empty reflection, using fallback");
            return fallback();
        }
        debug!(chars = body.chars().count(), "reflection received");
        ReflectionResult::Reflection(body.to_string())
    }
}

fn fallback() -> ReflectionResult {
    ReflectionResult::Reflection(FALLBACK_MESSAGE.to_string())
}

/// Google Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiProvider {
    http: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiProvider {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.provider_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }
}

impl TextProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(JournalError::MissingApiKey.into());
        };

        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .http
            .post(format!("{GEMINI_BASE_URL}/{}:generateContent", self.model))
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("failed to read response body")?;
        let body: Value = serde_json::from_str(&response_text)
            .with_context(|| format!("failed to parse Gemini response as JSON (status {status})"))?;
        if !status.is_success() {
            bail!("gemini call failed with status {}: {}", status, body);
        }

        extract_text(&body).ok_or_else(|| anyhow!("unexpected Gemini response payload: {}", body))
    }
}

fn extract_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}
