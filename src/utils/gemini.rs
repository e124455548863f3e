use std::time::Duration;

use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::errors::AppError;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Forwards prompts to the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    url: String,
}

pub fn create_gemini_client(config: &GeminiConfig) -> Result<GeminiClient, AppError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::InternalServerError(format!("Failed to build HTTP client: {}", e)))?;
    Ok(GeminiClient {
        client,
        api_key: config.api_key.clone(),
        url: format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        ),
    })
}

impl GeminiClient {
    /// Sends `prompt` as a single user turn and returns the first text part of
    /// the first candidate.
    pub async fn ask(&self, prompt: &str) -> Result<String, AppError> {
        let body = GenerateRequest {
            contents: [Content { role: "user", parts: [Part { text: prompt }] }],
        };

        debug!("Sending prompt to {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("AI service unreachable: {}", e);
                AppError::upstream(None, format!("Network error: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("AI service returned {}", status);
            return Err(AppError::upstream(
                Some(status.as_u16()),
                format!("AI service error: {}", status.as_u16()),
            ));
        }

        let raw = response.text().await.map_err(|e| {
            AppError::upstream(Some(status.as_u16()), format!("Failed to read AI response: {}", e))
        })?;
        extract_text(&raw)
    }
}

fn unexpected_format() -> AppError {
    AppError::upstream(Some(200), "Unexpected response format from AI service")
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_text(raw: &str) -> Result<String, AppError> {
    let parsed: GenerateResponse = serde_json::from_str(raw).map_err(|e| {
        error!("Unparseable AI response: {}", e);
        unexpected_format()
    })?;
    parsed
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(unexpected_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_text_part() {
        let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Drink water."},{"text":"ignored"}]}}]}"#;
        assert_eq!(extract_text(raw).unwrap(), "Drink water.");
    }

    #[test]
    fn missing_candidates_is_an_upstream_error() {
        for raw in [r#"{}"#, r#"{"candidates":[]}"#, r#"{"candidates":[{"content":{"parts":[]}}]}"#, "oops"] {
            match extract_text(raw) {
                Err(AppError::Upstream { message, .. }) => {
                    assert_eq!(message, "Unexpected response format from AI service")
                }
                other => panic!("expected upstream error for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn client_url_targets_generate_content() {
        let client = create_gemini_client(&GeminiConfig {
            api_key: "k".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "http://localhost:9000/v1beta/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.url, "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent");
    }
}
