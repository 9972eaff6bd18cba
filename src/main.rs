mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reply-assistant", version, about = "Reply Assistant — chat reply suggestions from the clipboard")]
struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the clipboard and suggest replies (default)
    Run,
    /// Generate suggestions for one message and exit
    Suggest {
        /// Incoming message text
        text: String,
        /// Ignore the learned style profile for this call
        #[arg(long)]
        no_style: bool,
    },
    /// Inspect or rebuild the learned style profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Inspect the feedback log
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },
    /// View or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored style profile
    Show,
    /// Recompute the profile from the feedback log
    Rebuild,
}

#[derive(Subcommand)]
enum FeedbackAction {
    /// Summarize recorded preferences
    Stats {
        /// Show the N most recent chosen replies
        #[arg(long, default_value_t = 5)]
        recent: usize,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display the effective configuration
    Show,
    /// Write a default config.json (keeps an existing one unless --force)
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let app = App::parse();

    let result = match app.command {
        None | Some(Commands::Run) => cli::run::run(),
        Some(Commands::Suggest { text, no_style }) => cli::suggest::run(&text, no_style),
        Some(Commands::Profile { action }) => match action {
            ProfileAction::Show => cli::profile::show(),
            ProfileAction::Rebuild => cli::profile::rebuild(),
        },
        Some(Commands::Feedback { action }) => match action {
            FeedbackAction::Stats { recent } => cli::feedback::stats(recent),
        },
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cli::config::run_show(),
            ConfigAction::Init { force } => cli::config::run_init(force),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
