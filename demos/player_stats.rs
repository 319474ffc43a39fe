//! Look up Battle Royale stats with the blocking client.
//!
//! `FORTNITE_API_KEY=... cargo run --example player_stats -- <name>`

use fortnite_api::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "Ninja".to_string());
    let client = ClientBuilder::from_env().build_blocking()?;

    let params = StatsParams::by_name(&name).with_time_window(TimeWindow::Season);
    match client.fetch_br_stats(&params) {
        Ok(stats) => match stats.overall() {
            Some(overall) => println!(
                "{}: {} wins in {} matches, K/D {:.2}",
                stats.account.name, overall.wins, overall.matches, overall.kd
            ),
            None => println!("{}: no stats this season", stats.account.name),
        },
        Err(ApiError::MissingApiKey(_)) => {
            eprintln!("Set {} to query stats", API_KEY_ENV_VAR);
        }
        Err(ApiError::Forbidden(resp)) => println!("{name}'s stats are private: {resp}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
