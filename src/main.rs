use clap::Parser;
use messenger_client_cli::utils::logger;
use messenger_client_cli::{CliConfig, MessengerClient, StaticMessageProvider};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting messenger-client-cli");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 創建訊息提供者與客戶端
    let provider = StaticMessageProvider::new();
    let client = MessengerClient::new(provider);

    // 將問候訊息輸出到標準輸出
    match client.run(&mut io::stdout()) {
        Ok(greeting) => {
            tracing::info!("✅ Message delivered: {}", greeting);
        }
        Err(e) => {
            tracing::error!("❌ Message delivery failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
