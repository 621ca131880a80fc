// Hook: commit-msg

use std::process::exit;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use anyhow::{Context, Result};
use structopt::StructOpt;
use translate::hook::{run, Args, Outcome};
use translate::config::App;

fn spinner() -> Result<ProgressBar> {
  let style = ProgressStyle::default_spinner()
    .tick_strings(&["-", "\\", "|", "/"])
    .template("{spinner:.blue} {msg}")
    .context("Failed to create progress bar style")?;

  let pb = ProgressBar::new_spinner();
  pb.set_style(style);
  pb.set_message("Translating commit message...");
  pb.enable_steady_tick(Duration::from_millis(150));
  Ok(pb)
}

#[tokio::main]
async fn main() {
  env_logger::init();
  let args = Args::from_args();

  let app = match App::new() {
    Ok(app) => app,
    Err(err) => {
      // A broken environment must not block the commit
      eprintln!("Error during translation: {err}");
      println!("Proceeding with original message");
      exit(0);
    }
  };

  let pb = spinner().ok();

  let result = run(&args, &app).await;

  if let Some(pb) = pb {
    pb.finish_and_clear();
  }

  match result {
    Ok(Outcome::Translated) => exit(0),
    Ok(Outcome::EmptyMessage) => {
      println!("Empty commit message, skipping translation");
      exit(0);
    }
    Ok(Outcome::NoTranslation) => {
      println!("No translation received, keeping original message");
      exit(0);
    }
    Err(err) if err.is_fatal() => {
      eprintln!("Error: {err}");
      exit(1);
    }
    Err(err) => {
      eprintln!("Error during translation: {err}");
      println!("Proceeding with original message");
      exit(0);
    }
  }
}
