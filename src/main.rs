use anyhow::{Result, bail};
use catalog_lookup::{config::Config, fetcher::HttpFetcher, search::Searcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        bail!("usage: catalog-lookup <query>...");
    }

    let config = Config::from_env()?;
    let labels = config.load_labels()?;
    let fetcher = HttpFetcher::new(&config)?;
    let searcher = Searcher::new(fetcher, config.base_url().clone(), labels);

    for query in &queries {
        let results = searcher.collect(query, config.output_buffer()).await;
        if results.is_empty() {
            tracing::warn!("No results for {}", query);
        }
        for meta in results {
            println!("{}", serde_json::to_string(&meta)?);
        }
    }

    Ok(())
}
