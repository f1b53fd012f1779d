use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "venue-chat", version, about = "Chat with a venue finder from the terminal", propagate_version = true)]
pub struct Cli {
    /// One-shot message
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct RuntimeArgs {
    /// Override the chat service base URL for this run
    #[arg(long = "endpoint", env = "VENUE_CHAT_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Override the data directory for this run
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Explicit config file path
    #[arg(long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat session
    Interactive,
    /// Send a single message and exit
    Chat {
        prompt: Vec<String>,
    },
    /// Show the chat history
    History,
    /// Show saved venues
    Saved,
    /// Show or switch the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Config management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file (~/.venue_chat/config.toml)
    Init {
        /// Overwrite if exists
        #[arg(long)]
        force: bool,
    },
    Set { key: String, value: String },
    List,
}
