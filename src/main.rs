use listing_matcher::config::load_config;
use listing_matcher::run_batch;
use std::path::Path;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Config path may be given as the only argument
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config = match load_config(Path::new(&config_path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            process::exit(1);
        }
    };

    match run_batch(&config).await {
        Ok(summary) => info!(
            "Finished: {} of {} products matched",
            summary.matched_products, summary.products
        ),
        Err(e) => {
            error!("Matching run failed: {}", e);
            process::exit(1);
        }
    }
}
