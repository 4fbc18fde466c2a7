// Mailsort command line entry point

use clap::Parser;
use mailsort_core::cli::{execute, MailsortArgs};
use mailsort_core::config::load_dotenv;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_tracing(args: &MailsortArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the JSON result, logs go to stderr
    if args.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = load_dotenv();
    let args = MailsortArgs::parse();
    init_tracing(&args);

    match dotenv_path {
        Some(path) => info!("Loaded environment from {:?}", path),
        None => info!("No .env file found, using process environment"),
    }

    match execute(&args).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e.into())
        }
    }
}
