use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdvisorError, ChatRequest, ChatService};
use crate::config::AdvisorConfig;
use crate::data::{ADVISOR_INSTRUCTION, BARANGAYS};
use crate::models::{ChatMessage, Role};

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AdvisorConfig, api_key: Option<String>) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl ChatService for GeminiClient {
    async fn reply(&self, request: &ChatRequest<'_>) -> Result<String, AdvisorError> {
        // Checked per call so a missing key surfaces as a failed turn.
        let api_key = self.api_key.as_deref().ok_or(AdvisorError::MissingApiKey)?;
        let body = build_body(request, self.temperature);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .header("User-Agent", concat!("manabo-atlas/", env!("CARGO_PKG_VERSION")))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status { status, body });
        }

        let data: GenerateResponse = response.json().await?;
        debug!(request_id = request.id, "advisor reply received");
        extract_text(data)
    }
}

/// Advisor persona followed by the full dataset as JSON.
pub fn system_instruction() -> String {
    let data = serde_json::to_string(BARANGAYS).unwrap_or_default();
    format!("{ADVISOR_INSTRUCTION}\n\nHere is the specific data for all barangays: {data}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<Role>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        Content {
            role: Some(message.role),
            parts: vec![Part {
                text: message.text.clone(),
            }],
        }
    }
}

fn build_body(request: &ChatRequest<'_>, temperature: f32) -> GenerateRequest {
    let mut contents: Vec<Content> = request.history.iter().map(Content::from).collect();
    contents.push(Content::from(&ChatMessage::user(request.message)));

    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: system_instruction(),
            }],
        },
        contents,
        generation_config: GenerationConfig { temperature },
    }
}

fn extract_text(response: GenerateResponse) -> Result<String, AdvisorError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AdvisorError::EmptyReply);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_layout() {
        let history = vec![ChatMessage::model("Hello!"), ChatMessage::user("Hi")];
        let request = ChatRequest {
            id: 7,
            message: "Is Ayyeng safe?",
            history: &history,
        };
        let body = serde_json::to_value(build_body(&request, 0.7)).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "Is Ayyeng safe?");
        assert!(body["systemInstruction"].get("role").is_none());
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_system_instruction_embeds_dataset() {
        let instruction = system_instruction();
        assert!(instruction.starts_with("You are the Manabo Flood Resilience Advisor"));
        assert!(instruction.contains("\"id\":\"san-ramon-east\""));
        assert!(instruction.contains("\"hardCM\":0.5"));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Luzong is "},{"text":"**High** risk."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Luzong is **High** risk.");
    }

    #[test]
    fn test_extract_text_empty() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(extract_text(response), Err(AdvisorError::EmptyReply)));

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(extract_text(blocked), Err(AdvisorError::EmptyReply)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_at_invocation() {
        let client = GeminiClient::new(&AdvisorConfig::default(), None).unwrap();
        let request = ChatRequest {
            id: 1,
            message: "hello",
            history: &[],
        };
        assert!(matches!(
            client.reply(&request).await,
            Err(AdvisorError::MissingApiKey)
        ));
    }

    #[test]
    fn test_url() {
        let client = GeminiClient::new(&AdvisorConfig::default(), Some("k".into())).unwrap();
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
