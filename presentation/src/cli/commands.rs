//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use verdict_domain::GenerationOptions;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    #[default]
    Text,
    /// The same JSON shape the HTTP API returns
    Json,
}

/// CLI arguments for verdict-router
#[derive(Parser, Debug)]
#[command(name = "verdict-router")]
#[command(
    author,
    version,
    about = "Generation router with primary/fallback failover and multi-judge fact-checking"
)]
#[command(long_about = r#"
Verdict Router sends a prompt to a primary model, falls back to a second model
once if the primary fails, and can fact-check the answer with a panel of three
judges that must reach a 2-of-3 quorum.

Configuration is merged from (in priority order):
1. VERDICT_* environment variables (e.g. VERDICT_SERVER__PORT=9000)
2. --config <path>     Explicit config file
3. ./verdict.toml      Project-level config
4. ~/.config/verdict-router/config.toml   Global config

Example:
  verdict-router generate "Summarize the history of the Eiffel Tower"
  verdict-router --primary gpt-5.2 fact-check "When was the Eiffel Tower built?"
  verdict-router serve --port 9000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Primary model (overrides [router] primary_model)
    #[arg(long, global = true, value_name = "MODEL")]
    pub primary: Option<String>,

    /// Fallback model (overrides [router] fallback_model)
    #[arg(long, global = true, value_name = "MODEL")]
    pub fallback: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Bind address (overrides [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides [server] port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a response with primary → fallback failover
    Generate {
        /// The prompt to send
        prompt: String,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Generate a response and fact-check it with the judge panel
    FactCheck {
        /// The prompt to send
        prompt: String,

        #[command(flatten)]
        generation: GenerationArgs,
    },
}

/// Options passed through to the provider untouched
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum output length in tokens
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// System prompt for the generating model
    #[arg(long, value_name = "TEXT")]
    pub system: Option<String>,
}

impl GenerationArgs {
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            system_prompt: self.system.clone(),
        }
    }
}
