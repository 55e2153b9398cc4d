use anyhow::Context;
use clap::Parser;
use data_facade::utils::{logger, validation::Validate};
use data_facade::{BackendAdapter, CliConfig, ConfigProvider, DataConsumer, TomlConfig};

const EXIT_CONFIG: i32 = 1;
const EXIT_RETRIEVAL: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // The logger is not up yet, so config file errors go straight to stderr
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting data-facade");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &file_config {
        Some(config) => run(config).await,
        None => run(&cli).await,
    };

    match result {
        Ok(payload) => {
            tracing::info!("✅ Retrieval completed");
            println!("{}", payload);
        }
        Err(e) => {
            let configuration = e
                .downcast_ref::<data_facade::RetrievalError>()
                .is_some_and(|e| e.is_configuration());
            tracing::error!("❌ {:#}", e);
            std::process::exit(if configuration {
                EXIT_CONFIG
            } else {
                EXIT_RETRIEVAL
            });
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<String> {
    config.validate()?;

    // Wire backend -> adapter -> consumer
    let adapter = BackendAdapter::from_config(config)?;
    tracing::info!("Using {} backend", adapter.backend_name());

    let consumer = DataConsumer::new(adapter);
    let payload = consumer
        .retrieve()
        .await
        .context("retrieval failed")?;

    Ok(payload.into_string())
}
