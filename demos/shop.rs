//! Print today's item shop with discounts.
//!
//! `cargo run --example shop`

use fortnite_api::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FortniteApiClient::new()?;

    let shop = client.fetch_shop(None).await?;
    println!("Shop {} ({} entries)", shop.date.format("%Y-%m-%d"), shop.entries.len());

    for entry in &shop.entries {
        let name = entry
            .bundle
            .as_ref()
            .map(|b| b.name.as_str())
            .or_else(|| entry.br_items.first().map(|c| c.name.as_str()))
            .unwrap_or(entry.dev_name.as_str());
        if entry.discount() > 0 {
            println!("  {name}: {} V-Bucks (-{})", entry.final_price, entry.discount());
        } else {
            println!("  {name}: {} V-Bucks", entry.final_price);
        }
    }

    Ok(())
}
