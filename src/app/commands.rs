//! Slash commands for the interactive prompt.

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Exit,
    /// Open or close the history panel.
    History,
    Saved,
    Theme,
    /// Save the card at this 1-based position.
    Save(usize),
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/saved" => Some(ChatCommand::Saved),
        "/theme" => Some(ChatCommand::Theme),
        "/save" => match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(n) if n > 0 => Some(ChatCommand::Save(n)),
            _ => Some(ChatCommand::Unknown("/save requires a card number".to_string())),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     Show this help message", style("/help").cyan());
    println!("  {}  Open or close the chat history", style("/history").cyan());
    println!("  {}    Show saved venues", style("/saved").cyan());
    println!("  {}   Save venue card N", style("/save N").cyan());
    println!("  {}    Switch between dark and light", style("/theme").cyan());
    println!("  {}     Leave the chat", style("/exit").cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse("find me a venue"), None);
    }

    #[test]
    fn parses_toggles() {
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("/SAVED"), Some(ChatCommand::Saved));
        assert_eq!(parse(" /theme "), Some(ChatCommand::Theme));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn save_needs_a_positive_number() {
        assert_eq!(parse("/save 2"), Some(ChatCommand::Save(2)));
        assert!(matches!(parse("/save"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/save 0"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/save two"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(parse("/dance"), Some(ChatCommand::Unknown("/dance".to_string())));
    }
}
