use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::config::Config;
use crate::dto::chat_dto::{ChatMessage, ChatProvider, ChatRequest};
use crate::error::{Error, Result};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic requires max_tokens; used when the caller sends none.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Thin forwarding layer to the chat-completion APIs.
///
/// Both providers answer under the same contract: the assistant text on
/// success, an [`Error::Upstream`] mirroring the provider's HTTP status on
/// failure.
#[derive(Clone)]
pub struct AiService {
    client: Client,
    openai_api_key: Option<String>,
    anthropic_api_key: Option<String>,
    openai_model: String,
    anthropic_model: String,
}

impl AiService {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            openai_api_key: config.openai_api_key.clone(),
            anthropic_api_key: config.anthropic_api_key.clone(),
            openai_model: config.openai_model.clone(),
            anthropic_model: config.anthropic_model.clone(),
        }
    }

    /// Explicit request field wins; otherwise the first configured key
    /// decides, OpenAI before Anthropic.
    pub fn select_provider(&self, requested: Option<ChatProvider>) -> Result<ChatProvider> {
        match requested {
            Some(ChatProvider::OpenAi) => {
                if self.openai_api_key.is_some() {
                    Ok(ChatProvider::OpenAi)
                } else {
                    Err(Error::ProviderUnavailable(
                        "OPENAI_API_KEY is not configured".to_string(),
                    ))
                }
            }
            Some(ChatProvider::Anthropic) => {
                if self.anthropic_api_key.is_some() {
                    Ok(ChatProvider::Anthropic)
                } else {
                    Err(Error::ProviderUnavailable(
                        "ANTHROPIC_API_KEY is not configured".to_string(),
                    ))
                }
            }
            None => {
                if self.openai_api_key.is_some() {
                    Ok(ChatProvider::OpenAi)
                } else if self.anthropic_api_key.is_some() {
                    Ok(ChatProvider::Anthropic)
                } else {
                    Err(Error::ProviderUnavailable(
                        "no chat API key configured".to_string(),
                    ))
                }
            }
        }
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        match self.select_provider(request.provider)? {
            ChatProvider::OpenAi => self.chat_openai(request).await,
            ChatProvider::Anthropic => self.chat_anthropic(request).await,
        }
    }

    async fn chat_openai(&self, request: &ChatRequest) -> Result<String> {
        let api_key = self
            .openai_api_key
            .as_deref()
            .ok_or_else(|| Error::ProviderUnavailable("OPENAI_API_KEY is not configured".into()))?;
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.openai_model.clone());

        let mut payload = serde_json::json!({
            "model": model,
            "messages": request.messages,
        });
        if let Some(temperature) = request.temperature {
            payload["temperature"] = serde_json::json!(temperature);
        }
        if let Some(max_tokens) = request.max_tokens {
            payload["max_tokens"] = serde_json::json!(max_tokens);
        }

        let res = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error {}: {}", status, text);
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: format!("OpenAI API error: {}", text),
            });
        }

        let body: JsonValue = res.json().await?;
        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid OpenAI response format").into())
    }

    async fn chat_anthropic(&self, request: &ChatRequest) -> Result<String> {
        let api_key = self.anthropic_api_key.as_deref().ok_or_else(|| {
            Error::ProviderUnavailable("ANTHROPIC_API_KEY is not configured".into())
        })?;
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.anthropic_model.clone());

        let (system, messages) = split_system_messages(&request.messages);
        let mut payload = serde_json::json!({
            "model": model,
            "max_tokens": request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            "messages": messages,
        });
        if let Some(system) = system {
            payload["system"] = serde_json::json!(system);
        }
        if let Some(temperature) = request.temperature {
            payload["temperature"] = serde_json::json!(temperature);
        }

        let res = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::error!("Anthropic API error {}: {}", status, text);
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: format!("Anthropic API error: {}", text),
            });
        }

        let body: JsonValue = res.json().await?;
        body.get("content")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("text"))
            .and_then(|t| t.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid Anthropic response format").into())
    }
}

/// Anthropic's wire format rejects "system" roles inside the message array;
/// they are pulled out and joined into the top-level system field.
fn split_system_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<ChatMessage>) {
    let mut system_parts: Vec<String> = Vec::new();
    let mut rest: Vec<ChatMessage> = Vec::new();
    for message in messages {
        if message.role == "system" {
            system_parts.push(message.content.clone());
        } else {
            rest.push(message.clone());
        }
    }
    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };
    (system, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(openai: Option<&str>, anthropic: Option<&str>) -> Config {
        Config {
            server_address: "127.0.0.1:0".to_string(),
            openai_api_key: openai.map(|k| k.to_string()),
            anthropic_api_key: anthropic.map(|k| k.to_string()),
            openai_model: "gpt-4o-mini".to_string(),
            anthropic_model: "claude-3-5-haiku-latest".to_string(),
            public_rps: 100,
            max_quiz_questions: 20,
        }
    }

    fn service(openai: Option<&str>, anthropic: Option<&str>) -> AiService {
        AiService::new(&config(openai, anthropic), Client::new())
    }

    fn message(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn system_messages_move_to_the_top_level() {
        let messages = vec![
            message("system", "Du bist ein Lerncoach."),
            message("user", "Erkläre die Virchow-Trias."),
            message("system", "Antworte auf Deutsch."),
        ];
        let (system, rest) = split_system_messages(&messages);
        assert_eq!(
            system.as_deref(),
            Some("Du bist ein Lerncoach.\n\nAntworte auf Deutsch.")
        );
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].role, "user");
    }

    #[test]
    fn no_system_message_means_no_system_field() {
        let messages = vec![message("user", "Hallo")];
        let (system, rest) = split_system_messages(&messages);
        assert!(system.is_none());
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn provider_defaults_to_openai_when_both_keys_exist() {
        let svc = service(Some("sk-a"), Some("sk-b"));
        assert_eq!(svc.select_provider(None).unwrap(), ChatProvider::OpenAi);
    }

    #[test]
    fn provider_falls_back_to_the_configured_key() {
        let svc = service(None, Some("sk-b"));
        assert_eq!(svc.select_provider(None).unwrap(), ChatProvider::Anthropic);
    }

    #[test]
    fn explicit_provider_without_key_is_rejected() {
        let svc = service(Some("sk-a"), None);
        let err = svc
            .select_provider(Some(ChatProvider::Anthropic))
            .unwrap_err();
        assert!(matches!(err, Error::ProviderUnavailable(_)));
    }

    #[test]
    fn no_key_at_all_is_rejected() {
        let svc = service(None, None);
        assert!(matches!(
            svc.select_provider(None),
            Err(Error::ProviderUnavailable(_))
        ));
    }
}
