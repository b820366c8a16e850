/*
[INPUT]:  Credentials JSON file path and a location
[OUTPUT]: Search results and a business lookup printed to stdout
[POS]:    Examples - signed search and lookup against the live API
[UPDATE]: When adding new endpoints
*/

use tracing_subscriber::EnvFilter;
use yelp_search_adapter::*;

/// Example: search a location and look up the first result
///
/// Usage: cargo run --example search_example -- json/credentials_secret.json "San Francisco, CA"
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    println!("=== Yelp Search Example ===\n");

    let mut args = std::env::args().skip(1);
    let credentials_path = args
        .next()
        .unwrap_or_else(|| "json/credentials_secret.json".to_string());
    let location = args.next().unwrap_or_else(|| "San Francisco, CA".to_string());

    let credentials = match Credentials::from_file(&credentials_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let client = match YelpClient::new(Oauth1Authenticator::new(credentials)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    println!("Searching for food in {}...", location);
    let params = SearchParameters::new().term("food").limit(3);
    let results = match client.search(&location, None, None, params).await {
        Ok(results) => results,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ {} total matches", results.total);
    for business in &results.businesses {
        println!("  - {} ({})", business.name, business.id);
    }

    if let Some(first) = results.businesses.first() {
        println!("\nLooking up {}...", first.id);
        match client.get_business(&first.id).await {
            Ok(response) => println!("✓ Business: {:?}", response.business.display_phone),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Search example complete");
}
