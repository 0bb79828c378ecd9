//! artifact-publisher: uploads compiled contract descriptors to storage.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use artifact_publisher::config::FileConfig;
use artifact_publisher::logging::init_tracing;
use artifact_publisher::{
    ConfigOverrides, DryRunStore, ObjectStore, Publisher, PublisherConfig, SupabaseStorage,
};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "artifact-publisher",
    about = "Upload compiled contract artifacts to object storage"
)]
struct Cli {
    /// Storage project URL.
    #[arg(long, env = "SUPABASE_URL")]
    storage_url: Option<String>,

    /// Service-role key used to authenticate uploads.
    #[arg(long, env = "SUPABASE_SERVICE_ROLE", hide_env_values = true)]
    service_key: Option<String>,

    /// Destination bucket (default "artifacts").
    #[arg(long, env = "ARTIFACT_BUCKET")]
    bucket: Option<String>,

    /// Prefix prepended to every object key, e.g. "artifacts/".
    #[arg(long, env = "ARTIFACT_KEY_PREFIX")]
    key_prefix: Option<String>,

    /// Build output directory holding `<Name>.sol/<Name>.json`.
    #[arg(long, env = "ARTIFACTS_DIR")]
    artifacts_dir: Option<PathBuf>,

    /// Path to a TOML configuration file. Flags and env vars override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read artifacts and log the uploads without contacting storage.
    #[arg(long)]
    dry_run: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "PUBLISHER_LOG_LEVEL")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            storage_url: self.storage_url.clone(),
            service_key: self.service_key.clone(),
            bucket: self.bucket.clone(),
            key_prefix: self.key_prefix.clone(),
            artifacts_dir: self.artifacts_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every artifact was published.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let file = match &cli.config {
        Some(path) => {
            let file = FileConfig::load(path)?;
            tracing::info!("Loaded config from {}", path.display());
            file
        }
        None => FileConfig::default(),
    };

    let (store, config): (Arc<dyn ObjectStore>, PublisherConfig) = if cli.dry_run {
        let mut overrides = cli.overrides();
        overrides.storage_url.get_or_insert_with(|| "dry-run".to_string());
        overrides.service_key.get_or_insert_with(|| "dry-run".to_string());
        let config = PublisherConfig::resolve(file, overrides)?;
        (Arc::new(DryRunStore), config)
    } else {
        let config = PublisherConfig::resolve(file, cli.overrides())?;
        let storage = SupabaseStorage::new(
            config.storage_url.clone(),
            config.service_key.clone(),
            config.connect_timeout,
            config.request_timeout,
        )
        .context("building storage client")?;
        (Arc::new(storage), config)
    };

    let publisher = Publisher::from_config(store, &config);
    let report = publisher
        .publish_all()
        .await
        .context("publishing artifacts")?;

    tracing::info!(
        uploaded = report.uploaded.len(),
        failed = report.failed.len(),
        results = %serde_json::to_string(&report.uploaded)?,
        "Artifacts uploaded to storage"
    );

    Ok(report.is_success())
}
