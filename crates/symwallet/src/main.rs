use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_stream::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symwallet::cli::cache::CacheAction;
use symwallet::cli::metadata::MetadataAction;
use symwallet::cli::validate::ValidateCommand;
use symwallet::cli::{Cli, Commands, OutputFormat};
use symwallet::output::{format_output, pretty};
use symwallet::{Config, MetadataService};
use symwallet_client::NodeClient;
use symwallet_core::cache::{EntityCache, METADATA_TABLE};
use symwallet_core::metadata::{MetadataModel, MetadataTarget};
use symwallet_core::transaction::{
    Deadline, MetadataTransactionParams, TransactionDetails, TransactionHeader,
};
use symwallet_core::validation::{InMemoryAccounts, RuleTable};

#[cfg(feature = "memory")]
type Backend = symwallet::cache::MemoryCache;

#[cfg(feature = "sqlite")]
type Backend = symwallet::cache::SqliteCache;

type MetadataStore = EntityCache<Backend, MetadataModel>;

/// Divisibility of the network currency.
const CURRENCY_DIVISIBILITY: u8 = 6;
const CURRENCY_TICKER: &str = " XYM";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "symwallet=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        node_url: cli.node_url.clone(),
        ..Config::from_env()
    };

    match cli.command {
        Commands::Metadata(command) => run_metadata(command.action, &config, cli.format).await,
        Commands::Validate(command) => run_validate(command, cli.format),
        Commands::Cache(command) => run_cache(command.action, &config).await,
    }
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> Result<Arc<Backend>> {
    Ok(Arc::new(Backend::new(config.cache_max_entries)))
}

#[cfg(feature = "sqlite")]
async fn open_cache(config: &Config) -> Result<Arc<Backend>> {
    Ok(Arc::new(Backend::new(&config.sqlite_path).await?))
}

fn metadata_store(cache: Arc<Backend>, config: &Config) -> Arc<MetadataStore> {
    Arc::new(EntityCache::new(cache, METADATA_TABLE, config.cache_ttl()))
}

async fn run_metadata(action: MetadataAction, config: &Config, format: OutputFormat) -> Result<()> {
    let client = Arc::new(NodeClient::new(&config.node_url));
    let store = metadata_store(open_cache(config).await?, config);
    let service = MetadataService::new(Arc::clone(&client), store, config.page_size);

    match action {
        MetadataAction::List {
            address,
            metadata_type,
            generation_hash,
        } => {
            let generation_hash = match generation_hash {
                Some(hash) => hash,
                None => client.generation_hash().await?,
            };

            let mut stream = service.metadata_list(&generation_hash, Some(&address), metadata_type);
            let mut emission = 0;
            while let Some(item) = stream.next().await {
                match item {
                    Ok(entries) => {
                        emission += 1;
                        match format {
                            OutputFormat::Json => println!("{}", format_output(&entries, format)),
                            OutputFormat::Pretty => println!(
                                "{}",
                                pretty::format_metadata_list(&format!("#{emission}"), &entries)
                            ),
                        }
                    }
                    Err(err) => {
                        // Earlier emissions stay on screen
                        tracing::error!(error = %err, "Metadata refresh failed");
                        eprintln!("warning: {err}");
                    }
                }
            }
        }
        MetadataAction::Transaction {
            source,
            target,
            metadata_type,
            target_id,
            key,
            value,
            max_fee,
            deadline_hours,
        } => {
            let params = MetadataTransactionParams {
                deadline: Deadline::in_hours(deadline_hours)?,
                network_type: source.network_type(),
                source_address: source,
                target_address: target,
                scoped_key: key,
                value,
                target: MetadataTarget::from_parts(metadata_type, target_id.as_deref())?,
                max_fee,
            };
            let transaction = service.metadata_transaction(params)?;

            let header = TransactionHeader {
                tag: transaction.kind.name().to_string(),
                ..TransactionHeader::default()
            };
            let details = TransactionDetails::new(
                &header,
                transaction.max_fee,
                CURRENCY_DIVISIBILITY,
                CURRENCY_TICKER,
            );
            match format {
                OutputFormat::Json => println!("{}", format_output(&details, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_details(&details)),
            }
        }
    }

    Ok(())
}

fn run_validate(command: ValidateCommand, format: OutputFormat) -> Result<()> {
    let rules = RuleTable::standard();

    let mut accounts = command
        .accounts
        .iter()
        .fold(InMemoryAccounts::new(), |accounts, name| {
            accounts.with_account(name.as_str())
        });
    if let (Some(name), Some(password)) = (command.active, command.password) {
        accounts = accounts.with_active(name, &password, command.wallets);
    }

    let failures = rules.check_field(&command.rules, &command.value, &accounts)?;
    match format {
        OutputFormat::Json => {
            let reasons: Vec<_> = failures
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "rule": f.rule,
                        "message": f.message,
                        "reason": f.reason.to_string(),
                    })
                })
                .collect();
            println!("{}", format_output(&reasons, format));
        }
        OutputFormat::Pretty => println!("{}", pretty::format_failures(&command.value, &failures)),
    }

    if !failures.is_empty() {
        anyhow::bail!("{} rule(s) rejected the value", failures.len());
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
async fn run_cache(action: CacheAction, config: &Config) -> Result<()> {
    use symwallet_core::cache::metadata_partition;

    let cache = open_cache(config).await?;

    match action {
        CacheAction::Clear {
            address,
            metadata_type,
            generation_hash,
        } => {
            let store = metadata_store(cache, config);
            let partition = metadata_partition(&generation_hash, &address, metadata_type);
            store.invalidate(&partition).await?;
            tracing::info!(partition = %partition, "Cleared cached metadata");
        }
        CacheAction::Purge => {
            let removed = cache.purge_expired().await?;
            tracing::info!(removed, "Purged expired cache entries");
        }
    }

    Ok(())
}

#[cfg(feature = "memory")]
async fn run_cache(_action: CacheAction, _config: &Config) -> Result<()> {
    anyhow::bail!(
        "the memory cache backend keeps nothing between runs; \
         build with the `sqlite` feature to manage a persistent cache"
    )
}
