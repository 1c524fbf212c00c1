mod dispatch;
mod handlers;

use astra_core::config::{self, Config};
use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::request::{Request, RequestBody, RequestEnvelope};
use astra_core::response::SkillResponse;
use astra_i18n::{
    resolve, BuiltinSource, BundleSource, DirSource, LocaleError, LocaleTable, MessageKey,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "astra",
    version,
    about = "astra — localized voice-assistant fact skill"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "astra.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one request envelope (JSON from stdin or a file).
    Respond {
        /// Read the request from this file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Load and validate the locale table, then print a summary.
    Check,
    /// Speak one random fact for a locale, without an envelope.
    Fact {
        /// Locale tag; defaults to the configured default locale.
        #[arg(short, long)]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.skill.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Phase one: build and validate the locale table. Dispatch never
    // starts before this completes.
    let table = load_table(&cfg).await?;

    match cli.command {
        Commands::Respond { file } => {
            let raw = match file {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };
            let response = respond(&raw, &table, &cfg)?;
            println!("{}", serde_json::to_string_pretty(&response.to_envelope())?);
        }
        Commands::Check => {
            let mut tags: Vec<&str> = table.tags().collect();
            tags.sort_unstable();
            println!("locale table OK: {} bundles", table.len());
            for tag in tags {
                if let Some(bundle) = table.get(tag) {
                    println!("  {tag}: {} keys", bundle.len());
                }
            }
        }
        Commands::Fact { locale } => {
            let locale = locale.unwrap_or_else(|| cfg.locale.default_locale.clone());
            let view = resolve(&locale, &table)?;
            let request = Request::LaunchRequest(RequestBody {
                locale,
                ..RequestBody::default()
            });
            let ctx = RequestContext::new(request, view);
            let response =
                handlers::build_dispatcher(cfg.skill.keep_session_open).dispatch(&ctx)?;
            println!("{}", response.speech_text.unwrap_or_default());
        }
    }

    Ok(())
}

async fn load_table(cfg: &Config) -> Result<LocaleTable, SkillError> {
    let table = match cfg.locale.bundle_dir {
        Some(ref dir) => DirSource::new(dir).load().await?,
        None => BuiltinSource.load().await?,
    };
    info!("locale table ready: {} bundles", table.len());
    Ok(table)
}

/// Answer one raw request. Malformed envelopes, unsupported locales,
/// and dispatcher configuration defects all still yield a user-visible
/// error response; only a failure of the error responder itself is
/// allowed to escape.
fn respond(raw: &str, table: &LocaleTable, cfg: &Config) -> Result<SkillResponse, SkillError> {
    let envelope: RequestEnvelope = match serde_json::from_str(raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("malformed request envelope: {e}");
            return Ok(error_response(table, &cfg.locale.default_locale));
        }
    };

    let view = match resolve(envelope.request.locale(), table) {
        Ok(view) => view,
        Err(LocaleError::UnsupportedLocale(tag)) => {
            error!("unsupported locale '{tag}'");
            return Ok(error_response(table, &cfg.locale.default_locale));
        }
        Err(e) => return Err(e.into()),
    };

    let ctx = RequestContext::new(envelope.request, view);
    info!(
        request_id = %ctx.id,
        platform_id = ctx.request.request_id().unwrap_or("-"),
        locale = ctx.locale(),
        request_type = ctx.request.type_name(),
        "request received"
    );

    match handlers::build_dispatcher(cfg.skill.keep_session_open).dispatch(&ctx) {
        Ok(response) => Ok(response),
        Err(e @ SkillError::NoHandlerMatched(_)) => {
            error!(request_id = %ctx.id, "{e}");
            Ok(error_response(table, &cfg.locale.default_locale))
        }
        Err(e) => Err(e),
    }
}

/// The generic error response in the configured default locale, or the
/// fixed English string when even that cannot resolve.
fn error_response(table: &LocaleTable, default_locale: &str) -> SkillResponse {
    if let Ok(view) = resolve(default_locale, table) {
        if let Ok(text) = view.text(MessageKey::ErrorMessage) {
            return SkillResponse::builder().speak(text).reprompt(text).build();
        }
    }
    handlers::default_error_response()
}
