use std::sync::Arc;

use heroes_cli::{commands, telemetry, Command, Config};
use heroes_core::{HeroClient, HeroService, MessageService, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init(&config.logging.filter);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let transport = match config.timeout() {
        Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
        None => ReqwestTransport::new(),
    };
    let messages = MessageService::new();
    let service = Arc::new(HeroService::new(
        HeroClient::new(&config.api.base_url),
        transport,
        messages.clone(),
    ));

    tracing::info!(base_url = %config.api.base_url, ?command, "running command");
    for line in commands::execute(command, service).await {
        println!("{line}");
    }

    println!();
    println!("Messages");
    for message in messages.messages() {
        println!("  {message}");
    }
    Ok(())
}
