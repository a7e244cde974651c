//! Twosquare CLI - Command-line tool for the two-square cipher
//!
//! The binary is named `twosquare`, the same as the library crate it wraps.

use anyhow::{anyhow, bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

mod commands;
mod config;
mod files;
mod output;

use config::Config;
use twosquare::{DecryptOptions, KeyPosition, MessageKind, Mode};

// Global context for commands to access
pub static GLOBAL_OPTS: OnceLock<GlobalOptions> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub output: OutputFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "twosquare",
    about = "Encrypt and decrypt messages with the two-square cipher",
    long_about = None,
    after_help = "EXAMPLES:
    # Encrypt a message
    twosquare encrypt \"Attack at dawn\" -k falcon -K osprey

    # Decrypt it again
    twosquare decrypt OMRCOIJOMBBXM -k falcon -K osprey

    # Encrypt a text file and save the ciphertext
    twosquare encrypt -i letter.txt -s secret.txt -k falcon -K osprey

    # Show the squares built from two keys
    twosquare tables -k falcon -K osprey

    # Store a key in the config file
    twosquare set-key falcon

    # Check a key before using it
    twosquare validate-key algorithm

    # Generate shell completions
    twosquare completion bash > ~/.bash_completion.d/twosquare.bash
    twosquare completion zsh > ~/.zsh/completions/_twosquare
    twosquare completion fish > ~/.config/fish/completions/twosquare.fish

CONFIGURATION:
    Keys and defaults are read from the file given with --config, or from
    ~/.twosquare/config.toml, or from ~/.config/twosquare/config.toml."
)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(global = true, short = 'o', long, value_enum)]
    output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except results and errors
    #[arg(global = true, short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(global = true, long)]
    no_color: bool,

    /// Path to a configuration file
    #[arg(global = true, short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where a message comes from and where the result goes
#[derive(clap::Args)]
struct MessageArgs {
    /// The message; read from --input when omitted
    #[arg(conflicts_with = "input")]
    message: Option<String>,

    /// Load the message from a .txt file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Save the result to a new .txt file
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,
}

/// The two cipher keys, falling back to the config file
#[derive(clap::Args)]
struct KeyArgs {
    /// First key (builds the upper square)
    #[arg(short = 'k', long = "key1", value_name = "KEY")]
    first: Option<String>,

    /// Second key (builds the lower square)
    #[arg(short = 'K', long = "key2", value_name = "KEY")]
    second: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a plaintext
    Encrypt {
        #[command(flatten)]
        message: MessageArgs,
        #[command(flatten)]
        keys: KeyArgs,
    },
    /// Decrypt a ciphertext
    Decrypt {
        #[command(flatten)]
        message: MessageArgs,
        #[command(flatten)]
        keys: KeyArgs,
        /// Write the merged letter as IJ instead of I
        #[arg(long)]
        keep_ij: bool,
        /// Keep a trailing Z instead of treating it as padding
        #[arg(long)]
        keep_pad: bool,
    },
    /// Display the squares built from the two keys
    Tables {
        #[command(flatten)]
        keys: KeyArgs,
    },
    /// Display the keys stored in the config file
    Keys,
    /// Validate a key and store it in the config file
    SetKey {
        /// The new key
        key: String,
        /// Replace the second key instead of the first
        #[arg(long)]
        second: bool,
    },
    /// Check a key against the key rules
    ValidateKey {
        /// Key to check
        key: String,
    },
    /// Check a message against the plaintext or ciphertext rules
    ValidateMessage {
        /// Message to check
        message: String,
        /// Which rules to apply (plain or cipher)
        #[arg(long, default_value = "plain")]
        kind: MessageKind,
    },
    /// Check the structure of a square stored as a JSON grid
    ValidateTable {
        /// JSON file holding five rows of five strings
        file: PathBuf,
    },
    /// Explain the rules for keys, messages and files
    About,
    /// Generate shell completion scripts
    #[command(about = "Generate completion scripts for your shell")]
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = config::load_config(cli.config.as_ref())?;

    let output = match (cli.output, config.default_output.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => OutputFormat::from_str(name, true)
            .map_err(|e| anyhow!("Invalid default_output in config: {}", e))?,
        (None, None) => OutputFormat::Text,
    };

    // Set up colored output based on flags
    if cli.no_color || output != OutputFormat::Text {
        colored::control::set_override(false);
    }

    // Store global options for commands to access
    let global_opts = GlobalOptions {
        output,
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    GLOBAL_OPTS
        .set(global_opts)
        .map_err(|_| anyhow!("Global options already set"))?;

    run(cli.command, cli.config, &config).map_err(report)
}

fn run(command: Commands, config_path: Option<PathBuf>, config: &Config) -> Result<()> {
    match command {
        Commands::Encrypt { message, keys } => {
            let (key1, key2) = resolve_keys(keys, config)?;
            let text = read_message(&message)?;
            commands::cipher::run(
                Mode::Encrypt,
                &text,
                &key1,
                &key2,
                DecryptOptions::default(),
                message.save.as_deref(),
            )?;
        }
        Commands::Decrypt {
            message,
            keys,
            keep_ij,
            keep_pad,
        } => {
            let (key1, key2) = resolve_keys(keys, config)?;
            let text = read_message(&message)?;

            let mut options = config.decrypt_options();
            if keep_ij {
                options.unmerge_ij = false;
            }
            if keep_pad {
                options.strip_trailing_pad = false;
            }

            commands::cipher::run(
                Mode::Decrypt,
                &text,
                &key1,
                &key2,
                options,
                message.save.as_deref(),
            )?;
        }
        Commands::Tables { keys } => {
            let (key1, key2) = resolve_keys(keys, config)?;
            commands::table::tables(&key1, &key2)?;
        }
        Commands::Keys => {
            commands::keys::show(config)?;
        }
        Commands::SetKey { key, second } => {
            let position = if second {
                KeyPosition::Second
            } else {
                KeyPosition::First
            };
            let path = match config_path {
                Some(path) => path,
                None => config::default_config_path()
                    .context("Could not determine a home directory for the config file")?,
            };
            commands::keys::set(config.clone(), position, &key, &path)?;
        }
        Commands::ValidateKey { key } => {
            commands::validate::key(&key)?;
        }
        Commands::ValidateMessage { message, kind } => {
            commands::validate::message(&message, kind)?;
        }
        Commands::ValidateTable { file } => {
            commands::validate::table(&file)?;
        }
        Commands::About => {
            commands::about::about()?;
        }
        Commands::Completion { shell } => {
            // Generate completion script for the specified shell
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}

/// Take keys from the command line, falling back to the config file
fn resolve_keys(keys: KeyArgs, config: &Config) -> Result<(String, String)> {
    let first = keys.first.or_else(|| config.first_key.clone());
    let second = keys.second.or_else(|| config.second_key.clone());

    match (first, second) {
        (Some(first), Some(second)) => Ok((first, second)),
        (None, _) => bail!("No first key given: pass -k/--key1 or set first_key in the config file"),
        (_, None) => {
            bail!("No second key given: pass -K/--key2 or set second_key in the config file")
        }
    }
}

fn read_message(args: &MessageArgs) -> Result<String> {
    match (&args.message, &args.input) {
        (Some(message), _) => Ok(message.clone()),
        (None, Some(path)) => files::load_message(path),
        (None, None) => bail!("No message given: pass it as an argument or use -i/--input"),
    }
}

/// Flag engine defects so they are not mistaken for bad input
fn report(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<twosquare::Error>() {
        Some(cipher_err) if !cipher_err.is_recoverable() => {
            err.context("Internal error in the cipher engine; please report this")
        }
        _ => err,
    }
}
