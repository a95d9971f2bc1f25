use clap::Parser;
use venue_flatten::utils::{logger, validation::Validate};
use venue_flatten::{CliConfig, EtlEngine, FlattenPipeline, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // 相對路徑一律以目前工作目錄為基準
    let storage = LocalStorage::new(".");
    let pipeline = FlattenPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Flattened venues written to {}", output_path);
        }
        Err(e) => {
            tracing::error!("Flatten run failed: {} (Category: {:?})", e, e.category());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
