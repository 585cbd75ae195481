//! model-registry command-line entry point

use clap::Parser;
use model_registry::cli::{Cli, Command, generate_config_template};
use model_registry::{Config, ModelRegistry, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::Config { output } = &cli.command {
        let template = generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(path, template)?;
                eprintln!("Configuration template written to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    telemetry::init(&config.observability.log_level);

    let provider = config.provider_config();
    let registry = ModelRegistry::new(&provider)?;

    match cli.command {
        Command::Models => {
            for name in registry.available_models() {
                println!("{}", name);
            }
        }
        Command::Resolve { name } => {
            println!("{}", registry.resolve(&name));
        }
        Command::Ask { model, prompt } => {
            let client = registry.get(&model);
            let reply = client.complete(&prompt).await?;
            println!("{}", reply);
        }
        Command::Config { .. } => {}
    }

    Ok(())
}
