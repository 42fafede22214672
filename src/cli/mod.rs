//! Command-line interface parsing and handling
//!
//! Parses arguments, loads configuration and dispatches into the chat loop,
//! the one-shot `ask` mode or the settings and credential subcommands.

pub mod ask;
pub mod auth;

use std::error::Error;
use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::ask::run_ask;
use crate::cli::auth::{interactive_auth, interactive_deauth};
use crate::core::config::data::path_display;
use crate::core::config::keys::CONFIG_KEYS;
use crate::core::config::Config;
use crate::core::credentials::KeySource;
use crate::core::session::{bootstrap_session, SessionOptions};
use crate::ui::chat_loop::run_chat;

static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown"),
        option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
    )
});

#[derive(Parser, Debug)]
#[command(name = "papagaio")]
#[command(version, long_version = LONG_VERSION.as_str())]
#[command(about = "A terminal chatbot with canned answers, arithmetic and web lookups")]
#[command(
    long_about = "Papagaio answers from a small table of canned and learned replies, \
evaluates arithmetic, looks up chemical compounds on PubChem and falls back to a web \
search for everything else. Replies can be translated as they arrive.\n\n\
Authentication:\n\
  Use 'papagaio auth' to store a translation API key in your system keyring.\n\n\
Environment Variables:\n\
  PAPAGAIO_TRANSLATE_KEY   Translation API key (takes precedence over the keyring)\n\
  RUST_LOG                 Diagnostic log filter (default: warn)\n\n\
Commands:\n\
  /help                    List chat commands\n\
  /log <filename>          Enable logging to specified file\n\
  /log                     Toggle logging pause/resume\n\
  /dump [filename]         Save the conversation to a file\n\
  /learned                 Show answers learned this session\n\
  /lang <code>             Change the translation language\n\
  /quit                    Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,

    /// Language code replies are translated into
    #[arg(short = 't', long, global = true, value_name = "CODE")]
    pub target_language: Option<String>,

    /// Do not translate replies
    #[arg(long, global = true)]
    pub no_translate: bool,

    /// Accept every "was this useful?" prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Never offer to learn answers
    #[arg(long, global = true)]
    pub no_learn: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Read the translation key from the environment only (skip the keyring)
    #[arg(long, global = true)]
    pub env_only: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Ask a single question, print every reply, and exit
    Ask {
        /// The question (multiple words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Set configuration values, or show them all when no key is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Store a translation API key in the system keyring
    Auth,
    /// Remove the stored translation API key
    Deauth,
}

impl Args {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            log_file: self.log.clone(),
            target_language: self.target_language.clone(),
            no_translate: self.no_translate,
            no_learn: self.no_learn,
            auto_accept: self.yes,
            env_only: self.env_only,
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let runtime = tokio::runtime::Runtime::new()?;
    if let Err(err) = runtime.block_on(async_main(args)) {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("papagaio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    let config_path = args.config.clone();
    let command = args.command.as_ref().unwrap_or(&Commands::Chat);

    match command {
        Commands::Chat => {
            let config = Config::load(config_path.as_deref())?;
            let (session, rx) = bootstrap_session(&config, args.session_options())?;
            if session.key_source == Some(KeySource::Placeholder) {
                eprintln!("⚠️  No translation key configured; translations will fail.");
                eprintln!("   Run 'papagaio auth' or set PAPAGAIO_TRANSLATE_KEY.");
            }
            eprintln!("🦜 Papagaio {}: type /help for commands, /quit to leave.", env!("CARGO_PKG_VERSION"));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_chat(session, rx, stdin, std::io::stdout()).await
        }
        Commands::Ask { message } => {
            let config = Config::load(config_path.as_deref())?;
            run_ask(&config, args.session_options(), &message.join(" ")).await
        }
        Commands::Set { key, value } => {
            let mut config = Config::load(config_path.as_deref())?;
            let Some(key) = key else {
                config.print_all();
                return Ok(());
            };
            match value.as_ref().filter(|parts| !parts.is_empty()) {
                Some(parts) => {
                    let value = parts.join(" ");
                    config.set_value(key, &value)?;
                    config.save(config_path.as_deref())?;
                    println!("✅ Set {key} to: {value}");
                }
                None => {
                    config.print_all();
                    eprintln!();
                    eprintln!("Settable keys: {}", CONFIG_KEYS.join(", "));
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load(config_path.as_deref())?;
            config.unset_value(key)?;
            config.save(config_path.as_deref())?;
            let shown = match config_path.as_deref() {
                Some(path) => path_display(path),
                None => path_display(Config::config_path()?),
            };
            println!("✅ Unset {key} in {shown}");
            Ok(())
        }
        Commands::Auth => interactive_auth(!args.env_only),
        Commands::Deauth => interactive_deauth(!args.env_only),
    }
}

#[cfg(test)]
mod tests;
