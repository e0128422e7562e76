//! ZNS Command Line Entry Point
//!
//! Thin front end over the `zns` library. Uses `anyhow` for command
//! errors; library errors keep their own types until they reach here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use platform::http::ReqwestFetcher;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zns::{
    DomainId, DomainRecord, DomainResolver, InMemoryNamingProvider, MetadataService, ZnsClient,
    ZnsConfig,
};

#[derive(Debug, Parser)]
#[command(name = "zns-cli", version, about = "Resolve ZNS names and domain metadata")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the domain id of a dotted name
    Id {
        /// Dotted name; omit for the root
        name: Option<String>,
    },
    /// Print the gateway URL and IPFS content id of a URI
    Url { uri: String },
    /// Fetch and print normalized metadata
    Metadata { url: String },
    /// List subdomains from a JSON fixture of domain records
    Feed {
        #[arg(long)]
        fixture: PathBuf,
        /// Parent domain id; defaults to the root
        #[arg(long)]
        parent: Option<String>,
        /// Load each item's metadata document
        #[arg(long)]
        with_metadata: bool,
    },
    /// Search a JSON fixture of domain records by name
    Search {
        #[arg(long)]
        fixture: PathBuf,
        pattern: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zns_cli=info,zns=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Arc::new(ZnsConfig::from_env().context("Invalid ZNS configuration")?);
    let resolver = DomainResolver::new(config.root_domain_id);

    tracing::debug!(
        root_domain_id = %config.root_domain_id,
        gateway = %config.ipfs_gateway.base_url(),
        "Loaded configuration"
    );

    match cli.command {
        Command::Id { name } => {
            println!("{}", resolver.id_from_name(name.as_deref()));
        }
        Command::Url { uri } => {
            let output = serde_json::json!({
                "url": config.ipfs_gateway.normalize_url(&uri),
                "ipfsContentId": config.ipfs_gateway.extract_ipfs_content_id(&uri),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Metadata { url } => {
            let fetcher = Arc::new(build_fetcher(&config)?);
            let service = MetadataService::new(fetcher, config.ipfs_gateway.clone());
            let metadata = service.load(&url).await;
            if metadata.is_none() {
                tracing::warn!(url = %url, "Metadata unavailable");
            }
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Command::Feed {
            fixture,
            parent,
            with_metadata,
        } => {
            let parent = parent
                .as_deref()
                .map(DomainId::parse_hex)
                .transpose()
                .context("Invalid parent domain id")?;

            let client = fixture_client(&fixture, &resolver, &config).await?;
            let mut items = client.get_feed(parent.as_ref()).await?;
            if with_metadata {
                let mut enriched = Vec::with_capacity(items.len());
                for item in items {
                    enriched.push(client.enrich(item).await);
                }
                items = enriched;
            }

            tracing::info!(count = items.len(), "Feed assembled");
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::Search { fixture, pattern } => {
            let client = fixture_client(&fixture, &resolver, &config).await?;
            let items = client.search(&pattern).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}

fn build_fetcher(config: &ZnsConfig) -> anyhow::Result<ReqwestFetcher> {
    ReqwestFetcher::new(config.request_timeout, &config.user_agent)
        .context("Failed to create HTTP client")
}

/// Client over an in-memory provider loaded from `path`
async fn fixture_client(
    path: &Path,
    resolver: &DomainResolver,
    config: &Arc<ZnsConfig>,
) -> anyhow::Result<ZnsClient<InMemoryNamingProvider, ReqwestFetcher>> {
    let records = load_fixture(path, resolver).await?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded fixture");

    let provider = InMemoryNamingProvider::from_records(resolver, records);
    let fetcher = build_fetcher(config)?;

    Ok(ZnsClient::new(
        Arc::new(provider),
        Arc::new(fetcher),
        Arc::clone(config),
    ))
}

/// Read domain records; entries without an `id` get one derived from `name`
async fn load_fixture(
    path: &Path,
    resolver: &DomainResolver,
) -> anyhow::Result<Vec<DomainRecord>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;

    entries
        .into_iter()
        .map(|mut entry| {
            if let Some(object) = entry.as_object_mut() {
                if !object.contains_key("id") {
                    let name = object.get("name").and_then(Value::as_str);
                    let id = resolver.id_from_name(name);
                    object.insert("id".to_string(), Value::String(id.to_hex()));
                }
            }
            serde_json::from_value(entry).context("Invalid domain record in fixture")
        })
        .collect()
}
