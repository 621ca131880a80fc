mod install;
mod uninstall;

use anyhow::Result;
use dotenv::dotenv;
use clap::Command;

fn cli() -> Command {
  Command::new("git-translate")
    .about("A git extension that rewrites commit messages into English Conventional Commits using Gemini")
    .subcommand_required(true)
    .arg_required_else_help(true)
    .subcommand(Command::new("install").about("Installs the commit-msg hook"))
    .subcommand(Command::new("uninstall").about("Uninstalls the commit-msg hook"))
}

fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  let args = cli().get_matches();

  match args.subcommand() {
    Some(("install", _)) => {
      install::run()?;
    }
    Some(("uninstall", _)) => {
      uninstall::run()?;
    }
    _ => {
      log::info!("Running git-translate...");
    }
  }

  Ok(())
}
