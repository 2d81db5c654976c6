//! Walk a TAXII server from discovery down to collection objects.
//!
//! Run with:
//! `TAXII_URL=https://example.com TAXII_USER=user TAXII_PASSWORD=pass cargo run --example discovery`
//!
//! Set `TAXII_VERSION=2.0` for TAXII 2.0 servers (defaults to 2.1).

use anyhow::Context;
use taxii2_client::{ConnectParams, TaxiiConnection, TaxiiFilters, TaxiiVersion};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let url = std::env::var("TAXII_URL").context("TAXII_URL is not set")?;
    let user = std::env::var("TAXII_USER").unwrap_or_default();
    let password = std::env::var("TAXII_PASSWORD").unwrap_or_default();
    let version: TaxiiVersion = std::env::var("TAXII_VERSION")
        .unwrap_or_else(|_| "2.1".to_string())
        .parse()?;

    let params = ConnectParams::from_url(&url, user, password)?.with_version(version);
    let conn = TaxiiConnection::new(params)?;

    println!("TAXII Discovery Demo");
    println!("====================\n");

    let server = conn.server();
    match server.discovery().await? {
        Some(discovery) => println!("Server: {}", discovery.title),
        None => println!("Server returned no readable discovery resource"),
    }

    for info in server.api_roots().await? {
        println!("API root: {} (max content {} bytes)", info.title, info.max_content_length);
    }

    for root in server.api_root_strings().await? {
        let api_root = conn.api_root(&root);
        let Some(collections) = api_root.collections().await? else {
            continue;
        };

        for collection in collections.collections.unwrap_or_default() {
            println!("  Collection {} [{}]", collection.title, collection.id);
            if !collection.can_read {
                continue;
            }

            let filters = TaxiiFilters::new().with_limit(5);
            let envelope = api_root
                .collection_endpoint(&collection)
                .get_objects(Some(&filters))
                .await?;
            for object in envelope.map(|e| e.objects.unwrap_or_default()).unwrap_or_default() {
                println!("    {} {}", object["type"], object["id"]);
            }
        }
    }

    Ok(())
}
