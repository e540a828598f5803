use chat_mirror::utils::{logger, validation::Validate};
use chat_mirror::{ConfigProvider, HttpMessageApi, Message, MessageApi, MessageDraft, Result};
use clap::Parser;

/// Scripted tour of the chat API: list, post, edit, list, delete, list.
/// Useful against a dev server to confirm every endpoint behaves.
#[derive(Debug, Parser)]
#[command(name = "walkthrough")]
#[command(about = "Exercises the chat API end to end: post, edit, delete")]
struct Args {
    #[arg(long, default_value = "http://localhost:8000")]
    api_base_url: String,

    #[arg(long, default_value = "Seanie X")]
    author: String,

    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

impl ConfigProvider for Args {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for Args {
    fn validate(&self) -> Result<()> {
        chat_mirror::utils::validation::validate_url("api_base_url", &self.api_base_url)?;
        chat_mirror::utils::validation::validate_non_empty_string("author", &self.author)?;
        chat_mirror::utils::validation::validate_range(
            "request_timeout_secs",
            self.request_timeout_secs,
            1,
            300,
        )?;
        Ok(())
    }
}

fn print_listing(messages: &[Message]) {
    for message in messages {
        println!("  [{}] {}: {}", message.id, message.author, message.message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    if let Err(e) = args.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    println!("🚀 Walking the chat API at {}", args.api_base_url);

    let author = args.author.clone();
    let api = HttpMessageApi::new(args);

    println!("\n📡 Fetching message history...");
    let history = api.list_messages().await?;
    println!("✅ {} messages on the server", history.len());
    print_listing(&history);

    println!("\n📡 Posting a new message as {}...", author);
    let draft = MessageDraft::new(
        format!("Hello from Earth -> {}", chrono::Utc::now().timestamp_millis()),
        author,
    );
    let created = api.post_message(&draft).await?;
    println!("✅ Server assigned id {} (uuid {})", created.id, created.uuid);

    println!("\n📡 Editing message {}...", created.id);
    let mut edited = created.clone();
    edited.message = "Hello, I'm Ryan!!!".to_string();
    let updated = api.edit_message(&edited).await?;
    println!("✅ Message {} now reads: {}", updated.id, updated.message);

    println!("\n📡 Fetching history again...");
    let after_edit = api.list_messages().await?;
    println!("✅ {} messages on the server", after_edit.len());
    print_listing(&after_edit);

    println!("\n📡 Deleting message {}...", created.id);
    api.delete_message(created.id).await?;
    println!("✅ Deleted");

    println!("\n📡 Final history check...");
    let after_delete = api.list_messages().await?;
    println!("✅ {} messages on the server", after_delete.len());
    print_listing(&after_delete);

    if after_delete.iter().any(|m| m.id == created.id) {
        println!("🔶 Message {} still listed; the server may be lagging", created.id);
    }

    println!("\n🎉 Walkthrough complete!");

    Ok(())
}
