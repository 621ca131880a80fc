use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use colored::*;

use crate::profile;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A text-generation capability: prompt in, completion out.
/// The hook depends on this trait so tests can substitute a stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
  async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
  contents: Vec<Content>
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
  #[serde(default)]
  parts: Vec<Part>
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
  #[serde(default)]
  text: String
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
  #[serde(default)]
  candidates: Vec<Candidate>
}

#[derive(Debug, Deserialize)]
struct Candidate {
  content: Option<Content>
}

impl GenerateContentResponse {
  /// Concatenated text of the first candidate, empty when the model
  /// returned no usable candidate.
  fn text(&self) -> String {
    self
      .candidates
      .first()
      .and_then(|candidate| candidate.content.as_ref())
      .map(|content| {
        content
          .parts
          .iter()
          .map(|part| part.text.as_str())
          .collect::<String>()
      })
      .unwrap_or_default()
  }
}

/// Gemini `generateContent` client. The credential is injected at
/// construction rather than read from ambient state.
#[derive(Debug, Clone)]
pub struct Client {
  http:    reqwest::Client,
  api_key: String,
  model:   String
}

impl Client {
  pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      api_key: api_key.into(),
      model: model.into()
    }
  }
}

#[async_trait]
impl TextGenerator for Client {
  async fn generate(&self, prompt: &str) -> Result<String> {
    profile!("Gemini API call");

    let url = format!("{API_BASE_URL}/models/{}:generateContent", self.model);
    let request = GenerateContentRequest {
      contents: vec![Content {
        parts: vec![Part { text: prompt.to_string() }]
      }]
    };

    let response = self
      .http
      .post(&url)
      .header("x-goog-api-key", &self.api_key)
      .json(&request)
      .send()
      .await
      .map_err(|err| {
        anyhow!(
          "{} {}\n    {}\n\nDetails:\n    {}\n\nSuggested Actions:\n    1. {}\n    2. {}",
          "ERROR:".bold().bright_red(),
          "Network error:".bright_white(),
          err.to_string().dimmed(),
          "Failed to connect to the Gemini service.".dimmed(),
          "Check your internet connection".yellow(),
          "Verify the Gemini service is not experiencing downtime".yellow()
        )
      })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(anyhow!(
        "{} {}\n    {}\n\nDetails:\n    {}\n\nSuggested Actions:\n    1. {}\n    2. {}",
        "ERROR:".bold().bright_red(),
        format!("Gemini API error ({status}):").bright_white(),
        body.dimmed(),
        "Failed to generate content.".dimmed(),
        "Ensure your Gemini API key is valid".yellow(),
        "Check your account quota".yellow()
      ));
    }

    let completion: GenerateContentResponse = response
      .json()
      .await
      .context("Failed to parse Gemini response")?;

    Ok(completion.text())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_response_text_concatenates_parts() {
    let response: GenerateContentResponse =
      serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"feat: "},{"text":"add login"}]}}]}"#).unwrap();
    assert_eq!(response.text(), "feat: add login");
  }

  #[test]
  fn test_response_text_without_candidates() {
    let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.text(), "");
  }

  #[test]
  fn test_response_text_without_content() {
    let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
    assert_eq!(response.text(), "");
  }

  #[test]
  fn test_response_text_with_empty_parts() {
    // A truncated completion can carry a candidate with no part text
    let response: GenerateContentResponse =
      serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]},"finishReason":"MAX_TOKENS"}]}"#).unwrap();
    assert_eq!(response.text(), "");
  }

  #[test]
  fn test_request_sends_contents_only() {
    let request = GenerateContentRequest {
      contents: vec![Content {
        parts: vec![Part { text: "hola".to_string() }]
      }]
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["contents"][0]["parts"][0]["text"], "hola");
    assert_eq!(json.as_object().unwrap().len(), 1, "no generation config or other tuning fields");
  }
}
