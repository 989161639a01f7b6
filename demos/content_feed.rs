//! Example balancing a content feed by content type.
//!
//! Run with: cargo run --example content_feed
//! Set `RUST_LOG=slotweave=debug` to see placement decisions.

use slotweave::balance::{BalanceConfig, Balancer, Category};
use slotweave::builder::FillStrategy;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone)]
struct Post {
    kind: &'static str,
    title: String,
}

fn posts(kind: &'static str, count: usize) -> Vec<Post> {
    (1..=count)
        .map(|i| Post {
            kind,
            title: format!("{kind} {i}"),
        })
        .collect()
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slotweave=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    println!("=== Content Feed ===\n");

    // Videos first, then images, then articles
    let categories = vec![
        Category::new("video", posts("video", 4)),
        Category::new("image", posts("image", 6)),
        Category::new("article", posts("article", 2)),
    ];

    let feed = Balancer::default().balance(categories.clone());
    println!("1. Default ratios (0.4 / 0.3 / 0.3)");
    for (slot, post) in feed.iter().enumerate() {
        println!("   {slot:>2}: {:<8} {}", post.kind, post.title);
    }
    println!();

    // Explicit ratio and alternating backfill
    let config = BalanceConfig::new().with_gap_strategy(FillStrategy::Alternating);
    let categories = vec![
        Category::new("video", posts("video", 4)).with_ratio(0.25),
        Category::new("image", posts("image", 6)).with_ratio(0.5),
        Category::new("article", posts("article", 2)).with_ratio(0.25),
    ];
    match Balancer::new(config).try_balance(categories) {
        Ok(feed) => {
            println!("2. Explicit ratios, alternating backfill");
            let kinds: Vec<&str> = feed.iter().map(|post| post.kind).collect();
            println!("   {}", kinds.join(", "));
        },
        Err(err) => println!("   rejected: {err}"),
    }
}
