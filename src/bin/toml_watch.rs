use chat_mirror::config::toml_config::TomlConfig;
use chat_mirror::utils::error::ErrorSeverity;
use chat_mirror::utils::{logger, validation::Validate};
use chat_mirror::{ConfigProvider, HttpMessageApi, MirrorEngine, MirrorSummary, WsFeed};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-watch")]
#[command(about = "Mirror a chat server using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "chat-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would happen without connecting
    #[arg(long)]
    dry_run: bool,
}

async fn run_session(config: TomlConfig, monitor_enabled: bool) -> chat_mirror::Result<MirrorSummary> {
    let socket_url = config.require_socket_url()?.to_string();
    let api = HttpMessageApi::new(config);
    let feed = WsFeed::connect(&socket_url).await?;

    let mut engine = MirrorEngine::new_with_monitoring(api, feed, monitor_enabled);
    engine.run().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(args.verbose || config.verbose_logging());

    tracing::info!("🚀 Starting TOML-configured mirror");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No connection will be made");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Client: {} v{}",
        config.client.name, config.client.version
    );
    println!("  API: {}", config.api_base_url());
    println!("  Socket: {}", config.socket_url().unwrap_or("(not set)"));
    println!("  Timeout: {}s", config.request_timeout_secs());

    if let Some(headers) = config.headers() {
        println!("  Headers: {} custom headers", headers.len());
    }

    println!("  Monitoring: {}", config.monitoring_enabled());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Would sync from:");
    println!("  GET {}/messages", config.api_base_url().trim_end_matches('/'));

    println!();
    println!("📡 Would follow broadcasts from:");
    match config.socket_url() {
        Some(url) => println!("  {}", url),
        None => println!("  🔶 No [socket] section; watch mode would refuse to start"),
    }

    println!();
    println!("⚙️ Session Behavior:");
    println!("  Request timeout: {}s", config.request_timeout_secs());
    println!(
        "  System monitoring: {}",
        if config.monitoring_enabled() { "on" } else { "off" }
    );

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during a real run.");
}
