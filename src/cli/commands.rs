use std::path::Path;

use anyhow::{anyhow, Result};
use console::style;
use tracing::debug;

use crate::api::client::HttpChatClient;
use crate::app::commands::{self, ChatCommand};
use crate::app::{Controller, Intent};
use crate::cli::args::{RuntimeArgs, ThemeAction};
use crate::config::settings::Settings;
use crate::store::{FileStorage, Store};
use crate::ui::card::CardOptions;
use crate::ui::terminal::TerminalView;
use crate::utils::format;

/// Composition root: settings plus per-run overrides become a controller.
pub fn build_controller(
    settings: &Settings,
    runtime: &RuntimeArgs,
    clear_on_reset: bool,
) -> Result<Controller<TerminalView>> {
    let endpoint = runtime.endpoint.as_deref().unwrap_or(&settings.endpoint);
    let data_dir = match &runtime.data_dir {
        Some(dir) => dir.into(),
        None => settings.data_dir_path()?,
    };
    debug!(endpoint, data_dir = %data_dir.display(), "starting controller");

    let store = Store::load(Box::new(FileStorage::new(data_dir)));
    let backend = HttpChatClient::new(endpoint)?;
    Ok(Controller::new(
        store,
        Box::new(backend),
        TerminalView::new(clear_on_reset),
        CardOptions::from(settings),
    ))
}

pub async fn handle_interactive(settings: &Settings, runtime: &RuntimeArgs) -> Result<()> {
    use dialoguer::Input;

    let mut controller = build_controller(settings, runtime, true)?;
    println!("{}", style("Venue finder. Type /help for commands, /exit to leave.").cyan());
    loop {
        let prompt = format!("{} You", controller.theme().icon());
        let line: String = match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(line) => line,
            // Ctrl+C / Ctrl+D
            Err(_) => break,
        };

        let intent = match commands::parse(&line) {
            None => {
                controller.input_mut().set(line);
                Intent::Send
            }
            Some(ChatCommand::Exit) => break,
            Some(ChatCommand::Help) => {
                commands::print_help();
                continue;
            }
            Some(ChatCommand::History) => Intent::ToggleHistory,
            Some(ChatCommand::Saved) => Intent::ShowSaved,
            Some(ChatCommand::Theme) => Intent::ToggleTheme,
            Some(ChatCommand::Save(n)) => match controller.card(n) {
                Some(card) => card.save_intent(),
                None => {
                    println!("{}", format::warn(&format!("No venue card {} on screen", n)));
                    continue;
                }
            },
            Some(ChatCommand::Unknown(what)) => {
                println!("{}", format::warn(&format!("Unknown command: {} (try /help)", what)));
                continue;
            }
        };

        if let Err(e) = controller.dispatch(intent).await {
            eprintln!("{}", format::error(&format!("{:#}", e)));
        }
    }
    Ok(())
}

pub async fn handle_chat(settings: &Settings, runtime: &RuntimeArgs, prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(anyhow!("Prompt is empty. Provide text or use interactive mode."));
    }
    let mut controller = build_controller(settings, runtime, false)?;
    controller.input_mut().set(prompt);
    controller.dispatch(Intent::Send).await
}

pub async fn handle_history(settings: &Settings, runtime: &RuntimeArgs) -> Result<()> {
    let mut controller = build_controller(settings, runtime, false)?;
    controller.dispatch(Intent::ToggleHistory).await
}

pub async fn handle_saved(settings: &Settings, runtime: &RuntimeArgs) -> Result<()> {
    let mut controller = build_controller(settings, runtime, false)?;
    controller.dispatch(Intent::ShowSaved).await
}

pub async fn handle_theme(
    settings: &Settings,
    runtime: &RuntimeArgs,
    action: Option<ThemeAction>,
) -> Result<()> {
    let mut controller = build_controller(settings, runtime, false)?;
    if action == Some(ThemeAction::Toggle) {
        controller.dispatch(Intent::ToggleTheme).await?;
    }
    let theme = controller.theme();
    println!("{} ({})", theme.label(), if theme.is_dark() { "dark" } else { "light" });
    Ok(())
}

pub async fn handle_config_init(force: bool, explicit: Option<&Path>) -> Result<()> {
    let path = Settings::init(force, explicit)?;
    println!("{}", format::success(&format!("Wrote {}", path.display())));
    Ok(())
}

pub async fn handle_config_list(settings: &Settings) -> Result<()> {
    println!("endpoint: {}", settings.endpoint);
    println!(
        "data dir: {}",
        settings.data_dir_path().map(|p| p.display().to_string()).unwrap_or_else(|_| "-".into())
    );
    println!("placeholder image: {}", settings.placeholder_image);
    println!("maps url: {}", settings.maps_url);
    Ok(())
}

pub async fn handle_config_set(
    settings: &mut Settings,
    explicit: Option<&Path>,
    key: &str,
    value: &str,
) -> Result<()> {
    settings.set(key, value)?;
    settings.save_with(explicit)?;
    Ok(())
}
