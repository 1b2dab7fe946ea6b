//! Load the home screen feeds once and print them.
//!
//! Run with: cargo run --example home_feed --features native

use coinwatch::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = CoinwatchClient::builder().build()?;

    client
        .subscribe(|state| {
            let loading: Vec<_> = state
                .statuses()
                .into_iter()
                .filter(|s| s.loading)
                .map(|s| s.slice.as_str())
                .collect();
            println!("  state changed, loading: {:?}", loading);
        })
        .await;

    // Kick off the watchlist on the runtime while the other two run inline.
    let watchlist = client.watchlist().spawn().await;
    let state = client.refresh_all().await;
    if let Err(err) = watchlist.await? {
        println!("watchlist refresh failed: {}", err);
    }

    let home = home_selector().select(&state);
    for (slice, error) in &home.errors {
        println!("[{}] {}", slice, error);
    }

    println!("\nWatchlist:");
    for coin in watchlist_selector().select(&state).data() {
        println!(
            "  #{:<5} {:<6} {:<14} {:>12} {:>7}%",
            coin.id, coin.symbol, coin.name, coin.price, coin.percent_change
        );
    }

    println!("\nTop movers:");
    for coin in top_movers_selector().select(&state).data() {
        println!("  {:<6} {:>7}%", coin.symbol, coin.percent_change);
    }

    println!("\nNews:");
    for item in news_selector().select(&state).data().iter().take(5) {
        println!("  {} ({})", item.title, item.source);
    }

    Ok(())
}
