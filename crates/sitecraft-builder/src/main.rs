//! SiteCraft builder: headless console entry point.
//!
//! Reads one [`BuilderCommand`] per line from stdin, executes it against a
//! single editing session, and prints the outcome on stdout.  Logs go to
//! stderr so the reply stream stays clean for scripting.
//!
//! # Usage
//!
//! ```text
//! sitecraft-builder [OPTIONS]
//!
//! Options:
//!   --settings <PATH>     Settings file [default: platform config dir]
//!   --api-base <URL>      Site backend base URL (overrides [api] base_url)
//!   --token <TOKEN>       Bearer token (overrides [api] access_token)
//!   --template <NAME>     Template to load or start from
//!   --offline             Use in-memory stores instead of the backend
//!   --read-only           Apply edits without history; refuse to save
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Overrides           |
//! |-----------------------|---------------------|
//! | `SITECRAFT_SETTINGS`  | `--settings`        |
//! | `SITECRAFT_API_BASE`  | `[api] base_url`    |
//! | `SITECRAFT_TOKEN`     | `[api] access_token`|
//! | `RUST_LOG`            | `[general] log_level` |
//!
//! # Example session
//!
//! ```text
//! $ sitecraft-builder --offline
//! color primary #000000
//! primary = #000000
//! undo
//! undone
//! save jane
//! saved as jane
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sitecraft_builder::application::commands::{
    BuilderCommand, BuilderConsole, CommandParseError, HELP,
};
use sitecraft_builder::application::connect_domain::{DomainConnectionManager, DomainProvider};
use sitecraft_builder::application::persist_config::{ConfigurationStore, PersistenceGateway};
use sitecraft_builder::application::session::BuilderSession;
use sitecraft_builder::infrastructure::remote::{
    ApiClient, HttpConfigStore, HttpDomainProvider, InMemoryConfigStore, InMemoryDomainProvider,
};
use sitecraft_builder::infrastructure::storage::settings::{
    load_settings, load_settings_from, BuilderSettings,
};
use sitecraft_core::{DnsTargets, TemplateId};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Headless console for the SiteCraft visual site builder.
#[derive(Debug, Parser)]
#[command(
    name = "sitecraft-builder",
    about = "Edit, save, and publish SiteCraft site configurations from the terminal",
    version
)]
struct Cli {
    /// Settings file to read instead of the platform default.
    #[arg(long, env = "SITECRAFT_SETTINGS")]
    settings: Option<PathBuf>,

    /// Base URL of the site backend.
    #[arg(long, env = "SITECRAFT_API_BASE")]
    api_base: Option<String>,

    /// Bearer token identifying the owner.
    #[arg(long, env = "SITECRAFT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Template to load (or start from when nothing is stored).
    #[arg(long)]
    template: Option<TemplateId>,

    /// Keep everything in memory; nothing leaves the process.
    #[arg(long)]
    offline: bool,

    /// Apply edits without recording history and refuse to save.
    #[arg(long)]
    read_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => load_settings_from(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?,
        None => load_settings().unwrap_or_else(|e| {
            eprintln!("settings unavailable ({e}); using defaults");
            BuilderSettings::default()
        }),
    };

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.general.log_level)),
        )
        .init();

    let template = cli.template.unwrap_or(settings.general.default_template);
    let session = BuilderSession::new(template).with_read_only(cli.read_only);
    let dns_targets = settings.dns.targets();

    if cli.offline {
        info!("running offline with in-memory stores");
        let store = InMemoryConfigStore::new();
        let provider = InMemoryDomainProvider::linked(store.clone());
        run(session, store, provider, dns_targets, cli.template).await
    } else {
        let base_url = cli.api_base.unwrap_or(settings.api.base_url);
        let token = cli.token.or(settings.api.access_token);
        if token.is_none() {
            warn!("no access token configured; requests are unauthenticated");
        }
        info!(%base_url, "using site backend");
        let api = ApiClient::new(base_url, token);
        let store = HttpConfigStore::new(api.clone());
        let provider = HttpDomainProvider::new(api);
        run(session, store, provider, dns_targets, cli.template).await
    }
}

/// Loads the stored record, then executes stdin commands until EOF or `quit`.
async fn run<S, P>(
    session: BuilderSession,
    store: S,
    provider: P,
    dns_targets: DnsTargets,
    template: Option<TemplateId>,
) -> anyhow::Result<()>
where
    S: ConfigurationStore,
    P: DomainProvider,
{
    let mut console = BuilderConsole::new(
        session,
        PersistenceGateway::new(store),
        DomainConnectionManager::new(provider),
        dns_targets,
    );

    match console.open(template).await {
        Ok(reply) => println!("{reply}"),
        Err(e) => warn!("could not load stored configuration: {e}; starting from defaults"),
    }
    println!("type `help` for commands, `quit` to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        let command = match line.parse::<BuilderCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("error: {e}");
                if matches!(e, CommandParseError::Unknown(_)) {
                    println!("{HELP}");
                }
                continue;
            }
        };

        match console.execute(command).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => println!("error: {e}"),
        }
    }

    if console.session().has_unsaved_changes() {
        warn!("exiting with unsaved changes");
    }
    info!("builder console stopped");
    Ok(())
}
