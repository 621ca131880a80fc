use serde::Deserialize;
use config::Config;
use anyhow::{Context, Result};

// Constants
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct App {
  pub gemini_api_key: Option<String>,
  pub model:          String
}

impl App {
  /// Loads settings from the process environment (after `.env`, if present).
  /// The credential lives in `GEMINI_API_KEY`; everything else has defaults.
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();

    let config = Config::builder()
      .add_source(config::Environment::default().try_parsing(true))
      .set_default("model", DEFAULT_MODEL)?
      .build()?;

    config
      .try_deserialize()
      .context("Failed to load configuration from environment")
  }

  /// The API key, treating an empty value as unset.
  pub fn api_key(&self) -> Option<&str> {
    self
      .gemini_api_key
      .as_deref()
      .map(str::trim)
      .filter(|key| !key.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_key_empty_is_unset() {
    let app = App {
      gemini_api_key: Some("   ".to_string()),
      ..Default::default()
    };
    assert_eq!(app.api_key(), None);
  }

  #[test]
  fn test_api_key_trimmed() {
    let app = App {
      gemini_api_key: Some(" key-123 ".to_string()),
      ..Default::default()
    };
    assert_eq!(app.api_key(), Some("key-123"));
  }
}
