use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arabica_cli::commands::{config_ops, convert_ops, rules_ops};
use arabica_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "arabica", about = "Arabic ⇄ Latin transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Arabic text to Latin
    Latin {
        /// Arabic text (read from stdin when omitted)
        text: Option<String>,
        /// Rule store directory with user-edited rules
        #[arg(long)]
        store: Option<PathBuf>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Print the per-word analysis as JSON before the result
        #[arg(long)]
        explain: bool,
    },
    /// Map Latin text back to vocalized Arabic (best effort)
    Arabic {
        /// Latin text (read from stdin when omitted)
        text: Option<String>,
        /// Rule store directory with user-edited rules
        #[arg(long)]
        store: Option<PathBuf>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Inspect and edit the rule table
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
    /// Export or validate settings TOML
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List the rules of one category
    List {
        /// consonants, diacritics or combinations
        category: String,
        /// Rule store directory (default: $ARABICA_HOME or ~/.config/arabica)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Change the Latin side of one rule
    Set {
        category: String,
        index: usize,
        latin: String,
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Restore the built-in rules
    Reset {
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Export the built-in rules as TOML
    Export,
    /// Validate a rules TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Export default settings as TOML
    Export,
    /// Validate a settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Latin {
            text,
            store,
            settings,
            explain,
        } => convert_ops::latin_cmd(
            text.as_deref(),
            store.as_deref(),
            settings.as_deref(),
            explain,
        ),
        Command::Arabic {
            text,
            store,
            settings,
        } => convert_ops::arabic_cmd(text.as_deref(), store.as_deref(), settings.as_deref()),
        Command::Rules { action } => match action {
            RulesAction::List { category, store } => {
                rules_ops::rules_list(&category, store.as_deref())
            }
            RulesAction::Set {
                category,
                index,
                latin,
                store,
            } => rules_ops::rules_set(&category, index, &latin, store.as_deref()),
            RulesAction::Reset { store } => rules_ops::rules_reset(store.as_deref()),
            RulesAction::Export => rules_ops::rules_export(),
            RulesAction::Validate { file } => rules_ops::rules_validate(&file),
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
