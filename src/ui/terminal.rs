use std::io::Write;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use crate::store::Turn;
use crate::ui::card::VenueCard;
use crate::ui::theme::Theme;
use crate::ui::{LoadingId, Role, View};
use crate::utils::format;

/// Prints the conversation to stdout.
pub struct TerminalView {
    term: Term,
    theme: Theme,
    spinners: Vec<(LoadingId, ProgressBar)>,
    next_loading: u64,
    clear_on_reset: bool,
}

impl TerminalView {
    pub fn new(clear_on_reset: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: Theme::default(),
            spinners: Vec::new(),
            next_loading: 0,
            clear_on_reset,
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

impl View for TerminalView {
    fn add_message(&mut self, text: &str, role: Role) {
        match role {
            Role::User => self.line(&format!("{} {}", format::user("You:", self.theme), text)),
            Role::Bot => self.line(&format!(
                "{} {}",
                format::accent("Bot:", self.theme),
                format::bot(text, self.theme)
            )),
        }
    }

    fn show_loading(&mut self) -> LoadingId {
        let id = LoadingId(self.next_loading);
        self.next_loading += 1;
        let pb = ProgressBar::new_spinner().with_message("Thinking...");
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinners.push((id, pb));
        id
    }

    fn remove_loading(&mut self, id: LoadingId) {
        if let Some(pos) = self.spinners.iter().position(|(s, _)| *s == id) {
            let (_, pb) = self.spinners.remove(pos);
            pb.finish_and_clear();
        }
    }

    fn add_venue_card(&mut self, card: &VenueCard, position: usize) {
        let t = self.theme;
        self.line("");
        let title = if card.kind.is_empty() {
            card.name.clone()
        } else {
            format!("{} ({})", card.name, card.kind)
        };
        self.line(&format!("  [{}] {}", position, format::accent(&title, t)));
        self.line(&format!("      \u{2605} {}", card.rating));
        if let Some(price) = &card.price {
            self.line(&format!("      $ {}", price));
        }
        if let Some(capacity) = &card.capacity {
            self.line(&format!("      \u{1F465} {}", capacity));
        }
        self.line(&format!("      {}", card.address));
        self.line(&format!("      {}", format::dim(&format!("image: {}", card.image))));
        self.line(&format!("      {}", format::dim(&format!("directions: {}", card.directions_url))));
        self.line(&format!("      {}", format::dim(&format!("/save {} to keep it", position))));
    }

    fn reset(&mut self) {
        if self.clear_on_reset {
            let _ = self.term.clear_screen();
        } else {
            self.line("");
        }
    }

    fn pin_to_bottom(&mut self) {
        let _ = std::io::stdout().flush();
    }

    fn show_history_panel(&mut self, open: bool, turns: &[Turn]) {
        if !open {
            self.line(&format::dim("History closed."));
            return;
        }
        self.line(&format::accent("Chat History", self.theme));
        if turns.is_empty() {
            self.line(&format::dim("  No conversations yet."));
        }
        for turn in turns {
            self.line(&format!("  {}", format::dim(&turn.local_timestamp())));
            self.line(&format!("    {} {}", format::user("You:", self.theme), turn.user_message));
            self.line(&format!("    {} {}", format::accent("Bot:", self.theme), turn.bot_response));
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn notify(&mut self, message: &str) {
        self.line(&format::success(message));
    }
}
