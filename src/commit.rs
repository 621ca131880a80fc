use anyhow::Result;

use crate::gemini::TextGenerator;

fn instruction(message: &str) -> String {
  format!(
    "Translate the following commit message into English and ensure it follows the Conventional Commits standard: \"{message}\"

Strict Rules:
1. Return ONLY the final translated and formatted message.
2. Ensure the format is: <type>(<scope>): <description> (scope is optional).
3. Use standard types: feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert.
4. If the original message lacks a semantic tag, analyze the content and prepend the correct one.
5. Do not include any feedback, explanations, or quotes in the response.
6. The <description> MUST be entirely in lowercase.
7. The <description> MUST be less than 50 characters.

Final Message:"
  )
}

/// Asks the model for a translated, Conventional-Commits-shaped message.
/// The returned text is trimmed but otherwise taken verbatim; formatting
/// rules are instructions to the model, not enforced here.
pub async fn translate(message: &str, generator: &dyn TextGenerator) -> Result<String> {
  let completion = generator.generate(&instruction(message)).await?;
  Ok(completion.trim().to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_instruction_embeds_message() {
    let prompt = instruction("agrego boton de login");
    assert!(prompt.contains("\"agrego boton de login\""));
    assert!(prompt.starts_with("Translate the following commit message into English"));
  }

  #[test]
  fn test_instruction_lists_standard_types() {
    let prompt = instruction("x");
    for kind in ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert"] {
      assert!(prompt.contains(kind), "missing type {kind}");
    }
  }

  #[test]
  fn test_instruction_keeps_format_rules() {
    let prompt = instruction("x");
    assert!(prompt.contains("<type>(<scope>): <description>"));
    assert!(prompt.contains("entirely in lowercase"));
    assert!(prompt.contains("less than 50 characters"));
    assert!(prompt.ends_with("Final Message:"));
  }
}
