mod cli;
mod config;
mod constants;
mod data;
mod error;
mod features;
mod llm;
mod services;

use std::io;
use std::sync::Arc;

use tracing::info;

use config::AppConfig;
use data::yahoo::YahooClient;
use error::is_quota_error;
use llm::LLMClient;
use services::advisor::Advisor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    info!("Using LLM Model: {}", config.llm.model);
    if let Some(url) = &config.llm.base_url {
        info!("Using Custom OpenAI Base URL: {}", url);
    }

    let data = Arc::new(YahooClient::new(config.market.clone()));
    let llm = Arc::new(LLMClient::new(&config.llm));
    let advisor = Advisor::new(data, llm);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("🚀 AI-Powered Investment Recommendation System");
    println!("{}", "=".repeat(60));
    println!("Get specific trade recommendations with risk management");
    println!("{}", "=".repeat(60));

    loop {
        let Some(request) = cli::read_request(&mut input, &mut output)? else {
            println!("👋 Thanks for using the Investment Recommendation System!");
            break;
        };

        println!(
            "\n🔍 Analyzing {} for optimal trade recommendation...",
            request.ticker
        );
        println!("⏳ Gathering market data, options chains, and macro indicators...");
        println!("{}", "-".repeat(60));

        match advisor.recommend(&request).await {
            Ok(report) => println!("{}", report),
            Err(e) if is_quota_error(&e) => {
                println!("❌ {}", e);
                println!("💡 Suggestions:");
                println!("   1. Visit https://platform.openai.com/usage to check usage");
                println!("   2. Visit https://platform.openai.com/account/billing to add a payment method");
                break;
            }
            Err(e) => println!("❌ {}", e),
        }

        if !cli::confirm_continue(&mut input, &mut output)? {
            println!("👋 Thanks for using the Investment Recommendation System!");
            break;
        }
    }

    Ok(())
}
