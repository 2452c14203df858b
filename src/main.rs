use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use airsuggest::{CatalogLoader, suggest};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(catalog_path) = args.next() else {
        bail!("usage: airsuggest <catalog.json> <query>...");
    };
    let query: String = args.collect::<Vec<_>>().join(" ");

    let catalog = CatalogLoader::load_from_file(&catalog_path)?;
    let sections = suggest(&catalog, &query);

    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}
