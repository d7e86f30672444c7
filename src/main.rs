use clap::Parser;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cot_reasoner::{
    azure::AzureClient,
    chain::analyze,
    config::Config,
    reasoner::ChainOfThoughtReasoner,
};

/// Generate and analyze a chain-of-thought reasoning trace for a question
#[derive(Debug, Parser)]
#[command(name = "cot-reasoner", version, about)]
struct Cli {
    /// The question to reason about
    question: String,

    /// Print only the final answer instead of the full chain and analysis
    #[arg(long)]
    answer_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        deployment = %config.azure.deployment,
        "CoT Reasoner starting..."
    );

    // Initialize Azure OpenAI client
    let azure = match AzureClient::new(&config.azure, config.request.clone()) {
        Ok(c) => {
            info!(endpoint = %config.azure.endpoint, "Azure OpenAI client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize Azure OpenAI client");
            return Err(e.into());
        }
    };

    let reasoner = ChainOfThoughtReasoner::new(azure, &config);

    let chain = match reasoner.reason(&cli.question).await {
        Ok(chain) => chain,
        Err(e) => {
            error!(error = %e, "Reasoning request failed");
            return Err(e.into());
        }
    };

    let analysis = analyze(&chain);

    if cli.answer_only {
        println!("{}", chain.final_answer);
    } else {
        let output = json!({
            "chain": chain,
            "analysis": analysis,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        cot_reasoner::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        cot_reasoner::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
