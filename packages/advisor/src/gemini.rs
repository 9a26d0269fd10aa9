//! # Gemini-backed transport
//!
//! [`GeminiClient`] implements [`GenerateContent`] against the Gemini
//! `generateContent` REST endpoint. The wire format is owned entirely by this
//! module — callers see only [`GenerateRequest`] in and plain text out.
//!
//! One HTTP POST per call, no timeout, no retry. A non-success status maps to
//! [`AdvisorError::Api`] with whatever body the service returned; a success
//! with no candidate text maps to [`AdvisorError::EmptyResponse`].

use serde::{Deserialize, Serialize};

use crate::client::{GenerateContent, GenerateRequest};
use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::models::{Role, Turn};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP client for the Gemini generateContent API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AdvisorConfig,
}

impl GeminiClient {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{BASE_URL}/models/{}:generateContent", self.config.model)
    }
}

impl GenerateContent for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, AdvisorError> {
        let body = RequestBody::from_request(request);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("advisory service returned {status}");
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResponseBody = response.json().await?;
        parsed.first_text().ok_or(AdvisorError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct RequestBody {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl RequestBody {
    fn from_request(request: GenerateRequest) -> Self {
        Self {
            system_instruction: request.system_instruction.map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            contents: request.turns.into_iter().map(Content::from_turn).collect(),
            generation_config: request.json_output.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn from_turn(turn: Turn) -> Self {
        let role = match turn.role {
            Role::User => "user",
            Role::Model => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: turn.text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl ResponseBody {
    /// Text of the first candidate, with multi-part answers joined.
    fn first_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let content = candidate.content?;
        let text: String = content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest {
            system_instruction: Some("Be helpful.".to_string()),
            turns: vec![Turn::user("hi"), Turn::model("hello"), Turn::user("bye")],
            json_output: true,
        };
        let body = RequestBody::from_request(request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be helpful.");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][2]["parts"][0]["text"], "bye");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_plain_request_omits_generation_config() {
        let body = RequestBody::from_request(GenerateRequest::single("hi"));
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("generationConfig").is_none());
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_first_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#;
        let parsed: ResponseBody = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text().unwrap(), "Hello there");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: ResponseBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_text().is_none());
    }
}
