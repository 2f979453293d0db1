use clap::{Parser, Subcommand};
use std::sync::Arc;

use mediator_demo::application::errors::AppError;
use mediator_demo::application::services::{Conversation, ConversationService};
use mediator_demo::domain::entities::Message;
use mediator_demo::infrastructure::adapters::ConsoleSink;
use mediator_demo::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "mediator-demo")]
#[command(about = "Two colleagues exchanging messages through a mediator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (used only if it exists)
    #[arg(short, long, default_value = "mediator.yaml")]
    config: String,

    /// Exit without waiting for a key press
    #[arg(long)]
    no_wait: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the message exchange (default)
    Run,
    /// Show version
    Version,
    /// Print the default config
    InitConfig,
}

fn main() {
    // Logs go to stderr so stdout only carries the conversation
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_demo(&cli.config, cli.no_wait),
        Commands::Version => {
            println!("mediator-demo v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_demo(config_path: &str, no_wait: bool) -> Result<(), AppError> {
    let config = Config::load_or_env(config_path)?;
    config.validate()?;

    let sink = Arc::new(ConsoleSink::new());
    let conversation = Conversation::wire(
        config.conversation.first.name.as_str(),
        config.conversation.second.name.as_str(),
        sink.clone(),
    )?;

    let service = ConversationService::new(conversation);
    service.run(
        &Message::new(config.conversation.first.message.as_str()),
        &Message::new(config.conversation.second.message.as_str()),
    )?;

    if config.console.wait_for_key && !no_wait {
        sink.wait_for_key()?;
    }

    Ok(())
}

fn init_config() -> Result<(), AppError> {
    let yaml = Config::default().to_yaml()?;
    print!("{}", yaml);
    Ok(())
}
