use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use venue_chat::cli::{self, args::{Cli, Commands, ConfigAction}};
use venue_chat::config::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.runtime.config.as_ref().map(PathBuf::from);
    let mut settings = Settings::load_with(config_path.as_deref())?;
    let runtime = &cli.runtime;

    match &cli.command {
        Some(Commands::Interactive) => cli::commands::handle_interactive(&settings, runtime).await?,
        Some(Commands::Chat { prompt }) => {
            cli::commands::handle_chat(&settings, runtime, &prompt.join(" ")).await?
        }
        Some(Commands::History) => cli::commands::handle_history(&settings, runtime).await?,
        Some(Commands::Saved) => cli::commands::handle_saved(&settings, runtime).await?,
        Some(Commands::Theme { action }) => {
            cli::commands::handle_theme(&settings, runtime, *action).await?
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force } => {
                cli::commands::handle_config_init(*force, config_path.as_deref()).await?
            }
            ConfigAction::List => cli::commands::handle_config_list(&settings).await?,
            ConfigAction::Set { key, value } => {
                cli::commands::handle_config_set(&mut settings, config_path.as_deref(), key, value)
                    .await?
            }
        },
        None => {
            if !cli.prompt.is_empty() {
                let prompt = cli.prompt.join(" ");
                cli::commands::handle_chat(&settings, runtime, &prompt).await?
            } else if console::user_attended() {
                cli::commands::handle_interactive(&settings, runtime).await?
            } else {
                Cli::command().print_help()?;
                println!();
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
