//! Live tests against fortnite-api.com.
//!
//! Ignored by default. Run with `cargo test --test live -- --ignored`;
//! stats tests also need `FORTNITE_API_KEY`.

use fortnite_api::api::*;
use fortnite_api::network::API_KEY_ENV_VAR;
use fortnite_api::shared::*;

fn has_key() -> bool {
    std::env::var(API_KEY_ENV_VAR).map(|k| !k.is_empty()).unwrap_or(false)
}

#[tokio::test]
#[ignore]
async fn live_shop_and_news() {
    let client = FortniteApiClient::new().unwrap();

    let shop = client.fetch_shop(None).await.unwrap();
    assert!(!shop.hash.is_empty());

    let news = client.fetch_news(Some(GameLanguage::German)).await.unwrap();
    assert!(news.br.is_some() || news.stw.is_some() || news.creative.is_some());
}

#[tokio::test]
#[ignore]
async fn live_cosmetic_lookup() {
    let client = FortniteApiClient::new().unwrap();

    let cosmetic = client
        .fetch_cosmetic_br("CID_028_Athena_Commando_F", None)
        .await
        .unwrap();
    assert_eq!(cosmetic.id, "CID_028_Athena_Commando_F");

    let err = client
        .fetch_cosmetic_br("CID_does_not_exist", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
#[ignore]
fn live_blocking_matches_async_shape() {
    let client = BlockingFortniteApiClient::new().unwrap();
    let colors = client.fetch_banner_colors().unwrap();
    assert!(!colors.is_empty());

    let aes = client.fetch_aes(KeyFormat::Hex).unwrap();
    assert!(aes.main_key.starts_with("0x") || aes.main_key.is_empty());
}

#[tokio::test]
#[ignore]
async fn live_stats_by_name() {
    if !has_key() {
        eprintln!("{} not set, skipping", API_KEY_ENV_VAR);
        return;
    }
    let client = ClientBuilder::from_env().build().unwrap();
    let stats = client
        .fetch_br_stats(&StatsParams::by_name("Ninja"))
        .await
        .unwrap();
    assert_eq!(stats.account.name.to_lowercase(), "ninja");
}
