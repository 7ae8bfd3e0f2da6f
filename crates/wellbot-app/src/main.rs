mod app;
mod cli;
mod credentials;
mod renderer;

use std::time::Duration;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use wellbot_ai::{GeminiClient, GeminiConfig, PostProcess, Session};
use wellbot_common::{ConfigError, WellbotError};
use wellbot_config::{ChatConfig, ResponseMode, WellbotConfig};

use crate::app::App;
use crate::renderer::TerminalRenderer;

/// Filter used while the config is loading, so first-run and validation
/// notices are visible.
const STARTUP_DIRECTIVE: &str = "info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into()),
    )
}

/// Install the subscriber. Logs go to stderr so they never interleave with
/// the chat on stdout. The returned handle swaps the filter once the
/// configured level is known.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// The directive to switch to after loading config, if any. An explicit
/// `--log-level` stays in force for the whole run.
fn configured_directive(args: &cli::Args, config: &WellbotConfig) -> Option<&'static str> {
    match args.log_level {
        Some(_) => None,
        None => Some(config.logging.level.directive()),
    }
}

fn load_config(args: &cli::Args) -> Result<WellbotConfig, ConfigError> {
    let mut config = wellbot_config::load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    wellbot_config::validation::validate(&config)?;
    Ok(config)
}

fn post_process(chat: &ChatConfig) -> PostProcess {
    match chat.mode {
        ResponseMode::None => PostProcess::None,
        ResponseMode::Bulletize => PostProcess::Bulletize,
        ResponseMode::Truncate => PostProcess::Truncate {
            max_words: chat.max_words as usize,
        },
    }
}

async fn run(config: WellbotConfig) -> wellbot_common::Result<()> {
    // Missing credentials halt here, before any request is attempted.
    let api_key = credentials::resolve_api_key(&config.ai.api_key_env)?;

    let timeout = Duration::from_secs(config.ai.timeout_secs.into());
    let gemini = GeminiConfig::new(api_key)
        .with_model(config.ai.model.as_str())
        .with_max_tokens(config.ai.max_tokens)
        .with_temperature(config.ai.temperature)
        .with_request_timeout(timeout);
    let client = GeminiClient::new(gemini).map_err(|e| WellbotError::Ai(e.to_string()))?;
    tracing::info!(model = client.model(), "Gemini client ready");

    let session = Session::new(config.chat.greeting.as_str())
        .with_context_turns(config.chat.context_turns as usize)
        .with_post_process(post_process(&config.chat))
        .with_timeout(timeout);

    let renderer = TerminalRenderer::new(
        std::io::stdout(),
        Duration::from_millis(config.display.reveal_delay_ms.into()),
        config.display.color && console::colors_enabled(),
    );

    let mut app = App::new(session, Box::new(client), renderer);
    app.run(tokio::io::BufReader::new(tokio::io::stdin())).await?;
    tracing::info!(turns = app.session().turn_count(), "Session ended");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    let filter = init_logging(args.log_level.as_deref().unwrap_or(STARTUP_DIRECTIVE));

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("wellbot: {e}");
            std::process::exit(2);
        }
    };

    if let Some(directive) = configured_directive(&args, &config) {
        if let Err(e) = filter.reload(build_filter(directive)) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }

    tracing::info!("wellbot v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        context_turns = config.chat.context_turns,
        mode = ?config.chat.mode,
        "Config loaded"
    );

    if let Err(e) = run(config).await {
        tracing::error!("{e}");
        eprintln!("wellbot: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_process_follows_chat_mode() {
        let mut chat = ChatConfig::default();
        assert_eq!(post_process(&chat), PostProcess::None);

        chat.mode = ResponseMode::Bulletize;
        assert_eq!(post_process(&chat), PostProcess::Bulletize);

        chat.mode = ResponseMode::Truncate;
        chat.max_words = 3;
        assert_eq!(post_process(&chat), PostProcess::Truncate { max_words: 3 });
    }

    #[test]
    fn configured_level_applies_without_cli_override() {
        use clap::Parser;
        use wellbot_config::LogLevel;

        let mut config = WellbotConfig::default();
        config.logging.level = LogLevel::Debug;

        let args = cli::Args::parse_from(["wellbot"]);
        assert_eq!(configured_directive(&args, &config), Some("debug"));

        let args = cli::Args::parse_from(["wellbot", "--log-level", "trace"]);
        assert_eq!(configured_directive(&args, &config), None);
    }

    #[test]
    fn bad_directive_falls_back_to_warn() {
        let filter = build_filter("wellbot=loudest");
        assert!(filter.to_string().contains("warn"));
    }
}
