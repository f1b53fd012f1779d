use console::style;

use crate::ui::theme::Theme;

pub fn success(msg: &str) -> String { style(msg).green().to_string() }
pub fn warn(msg: &str) -> String { style(msg).yellow().to_string() }
pub fn error(msg: &str) -> String { style(msg).red().to_string() }
pub fn dim(msg: &str) -> String { style(msg).dim().to_string() }

pub fn user(msg: &str, theme: Theme) -> String {
    match theme {
        Theme::Dark => style(msg).cyan().bold().to_string(),
        Theme::Light => style(msg).blue().bold().to_string(),
    }
}

pub fn bot(msg: &str, theme: Theme) -> String {
    match theme {
        Theme::Dark => style(msg).white().to_string(),
        Theme::Light => style(msg).black().to_string(),
    }
}

pub fn accent(msg: &str, theme: Theme) -> String {
    match theme {
        Theme::Dark => style(msg).yellow().bold().to_string(),
        Theme::Light => style(msg).magenta().bold().to_string(),
    }
}
