use std::path::PathBuf;
use std::fs::File;
use std::io::{Read, Write};

use structopt::StructOpt;
use anyhow::Result;
use thiserror::Error;

use crate::{commit, config, gemini};
use crate::gemini::TextGenerator;

// Error definitions
#[derive(Error, Debug)]
pub enum HookError {
  #[error("GEMINI_API_KEY is not configured\nSet it in your .env file\nGet your API key at: https://aistudio.google.com/apikey")]
  MissingApiKey,

  #[error("Failed to read commit message")]
  ReadCommitMessage(#[source] std::io::Error),

  #[error("Failed to write commit message")]
  WriteCommitMessage(#[source] std::io::Error),

  #[error(transparent)]
  Anyhow(#[from] anyhow::Error)
}

impl HookError {
  /// Only a missing credential may block the commit; every other failure
  /// is absorbed so the commit proceeds with the original message.
  pub fn is_fatal(&self) -> bool {
    matches!(self, HookError::MissingApiKey)
  }
}

// What a hook run did to the message file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The file was overwritten with the translated message.
  Translated,
  /// The message was empty; nothing to translate.
  EmptyMessage,
  /// The model returned nothing usable; original message kept.
  NoTranslation
}

// CLI Arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "commit-msg-hook", about = "Translates commit messages into English Conventional Commits.")]
pub struct Args {
  pub commit_msg_file: PathBuf
}

// File operations traits
pub trait FilePath {
  fn write(&self, msg: String) -> Result<(), std::io::Error>;
  fn read(&self) -> Result<String, std::io::Error>;
}

impl FilePath for PathBuf {
  fn write(&self, msg: String) -> Result<(), std::io::Error> {
    File::create(self)?.write_all(msg.as_bytes())
  }

  fn read(&self) -> Result<String, std::io::Error> {
    let mut contents = String::new();
    File::open(self)?.read_to_string(&mut contents)?;
    Ok(contents)
  }
}

/// Runs the full hook sequence: load message, resolve the credential,
/// translate, write back.
pub async fn run(args: &Args, app: &config::App) -> Result<Outcome, HookError> {
  let message = args
    .commit_msg_file
    .read()
    .map_err(HookError::ReadCommitMessage)?;
  let message = message.trim();

  // An empty message usually signals an aborted commit
  if message.is_empty() {
    return Ok(Outcome::EmptyMessage);
  }

  let api_key = app.api_key().ok_or(HookError::MissingApiKey)?;
  let client = gemini::Client::new(api_key, &app.model);

  translate(args, message, &client).await
}

/// Translates `message` via `generator` and overwrites the commit message
/// file when a usable completion comes back. The completion is trusted
/// verbatim apart from whitespace trimming.
pub async fn translate(args: &Args, message: &str, generator: &dyn TextGenerator) -> Result<Outcome, HookError> {
  let translated = commit::translate(message, generator).await?;

  if translated.is_empty() {
    return Ok(Outcome::NoTranslation);
  }

  args
    .commit_msg_file
    .write(format!("{translated}\n"))
    .map_err(HookError::WriteCommitMessage)?;

  Ok(Outcome::Translated)
}
