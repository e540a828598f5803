use chat_mirror::utils::error::ErrorSeverity;
use chat_mirror::utils::{logger, validation::Validate};
use chat_mirror::{CliConfig, HttpMessageApi, MirrorEngine, MirrorSummary, WsFeed};
use clap::Parser;

async fn run_session(config: CliConfig, monitor_enabled: bool) -> chat_mirror::Result<MirrorSummary> {
    let socket_url = config.socket_url.clone();
    let api = HttpMessageApi::new(config);
    let feed = WsFeed::connect(&socket_url).await?;

    let mut engine = MirrorEngine::new_with_monitoring(api, feed, monitor_enabled);
    engine.run().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting chat-mirror");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run_session(config, monitor_enabled).await {
        Ok(summary) => {
            tracing::info!("✅ Mirror session finished cleanly");
            println!(
                "✅ Mirror session finished: {} messages held",
                summary.final_count
            );
            println!(
                "📊 {} synced, {} inserted, {} replaced, {} removed, {} ignored in {:?}",
                summary.synced,
                summary.inserted,
                summary.replaced,
                summary.removed,
                summary.ignored,
                summary.duration
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Mirror session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
