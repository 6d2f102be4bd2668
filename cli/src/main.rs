//! CLI entrypoint for Verdict Router
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use verdict_application::{NoProgress, RouterInput, RouterProgressNotifier, RouterUseCase};
use verdict_domain::Model;
use verdict_infrastructure::{ConfigLoader, FileConfig, RoutingGateway, configured_providers};
use verdict_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, serve,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (before logging, so [logging] can take effect)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let _log_guard = init_logging(cli.verbose, &config);

    info!("Starting Verdict Router");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", toml::to_string_pretty(&redacted(&config))?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("A command is required (serve, generate or fact-check). See --help.");
    };

    // Command-line model overrides win over the config file
    let mut router_config = config.to_router_config()?;
    if let Some(primary) = &cli.primary {
        router_config = router_config.with_default_primary(Model::from(primary.as_str()));
    }
    if let Some(fallback) = &cli.fallback {
        router_config = router_config.with_default_fallback(Model::from(fallback.as_str()));
    }

    // === Dependency Injection ===
    // Provider adapters behind one routing gateway
    let providers = configured_providers(&config.providers)?;
    if providers.is_empty() {
        warn!("No provider API keys found; every model call will fail");
    }
    let gateway = Arc::new(RoutingGateway::new(providers, &config.providers));
    let router = Arc::new(RouterUseCase::new(gateway, router_config));

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let addr = server.socket_addr()?;

            let shutdown = CancellationToken::new();
            let signal = shutdown.clone();
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                    return;
                }
                info!("Shutdown requested");
                signal.cancel();
            });

            serve(router, addr, shutdown)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
        }

        Command::Generate { prompt, generation } => {
            let input = RouterInput::new(prompt).with_options(generation.to_options());
            let progress = progress_for(cli.quiet, cli.output);

            let response = router
                .generate_with_progress(input, progress.as_ref())
                .await?;

            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_generation(&response),
                OutputFormat::Json => ConsoleFormatter::format_generation_json(&response),
            };
            println!("{}", output);
        }

        Command::FactCheck { prompt, generation } => {
            let input = RouterInput::new(prompt).with_options(generation.to_options());
            let progress = progress_for(cli.quiet, cli.output);

            let response = router
                .generate_with_fact_check_and_progress(input, progress.as_ref())
                .await?;

            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_fact_checked(&response),
                OutputFormat::Json => ConsoleFormatter::format_fact_checked_json(&response),
            };
            println!("{}", output);
        }
    }

    Ok(())
}

/// Console logging to stderr, plus a daily-rotated file when `[logging] dir` is set.
///
/// `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "verdict-router.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

/// Copy of `config` safe to print: inline API keys are masked
fn redacted(config: &FileConfig) -> FileConfig {
    let mut config = config.clone();
    for key in [
        &mut config.providers.anthropic.api_key,
        &mut config.providers.openai.api_key,
    ] {
        if key.is_some() {
            *key = Some("<redacted>".to_string());
        }
    }
    config
}

/// Spinners on a terminal, plain lines otherwise, nothing with `--quiet`
fn progress_for(quiet: bool, output: OutputFormat) -> Box<dyn RouterProgressNotifier> {
    if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else if output == OutputFormat::Text {
        Box::new(SimpleProgress)
    } else {
        Box::new(NoProgress)
    }
}
