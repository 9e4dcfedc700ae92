//! Resume bullet rewriting — the single point of entry for all hosted-LLM
//! calls in this service.
//!
//! This client never returns an error: a missing key or an upstream failure
//! becomes a bracketed placeholder string on the normal success path, which
//! the caller displays as if it were a rewrite. Uninterrupted rendering wins
//! over strict failure signaling here.

mod handlers;

pub use handlers::handle_rewrite;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all rewrites. Hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 120;

pub const NOT_CONFIGURED: &str =
    "[OpenAI API key not configured. Set OPENAI_API_KEY environment variable to use rewriter.]";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// OpenAI chat-completions wrapper for the bullet rewriter.
#[derive(Clone)]
pub struct RewriteClient {
    client: Client,
    api_key: String,
}

impl RewriteClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Rewrites one resume bullet in the requested tone.
    pub async fn rewrite(&self, bullet: &str, tone: &str) -> String {
        if self.api_key.is_empty() {
            return NOT_CONFIGURED.to_string();
        }
        match self.call(bullet, tone).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Rewrite call failed: {e:#}");
                format!("[OpenAI error: {e}]")
            }
        }
    }

    async fn call(&self, bullet: &str, tone: &str) -> anyhow::Result<String> {
        let prompt = build_prompt(bullet, tone);
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a professional resume writer.",
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: ChatResponse = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("empty choices in rewrite response"))?;
        debug!("Rewrite succeeded ({} chars)", text.len());
        Ok(text)
    }
}

fn build_prompt(bullet: &str, tone: &str) -> String {
    format!(
        "Rewrite the following resume bullet to be concise, recruiter-friendly, and impactful. \
         Use measurable language if possible. Keep it one line.\n\n\
         Tone: {tone}\n\
         Bullet: {bullet}\n\n\
         Return only the rewritten bullet."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_includes_tone_and_bullet() {
        let prompt = build_prompt("Improved forecasting", "assertive");
        assert!(prompt.contains("Tone: assertive"));
        assert!(prompt.contains("Bullet: Improved forecasting"));
    }

    #[tokio::test]
    async fn test_unconfigured_key_returns_placeholder() {
        let client = RewriteClient::new(String::new());
        let out = client.rewrite("anything", "formal").await;
        assert_eq!(out, NOT_CONFIGURED);
    }
}
