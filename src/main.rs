//! LRU TTL Cache demo
//!
//! Builds a cache from `LRU_CAPACITY` / `LRU_TTL`, runs a short workload and
//! prints the resulting recency order and statistics.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_ttl_cache::{CacheConfig, LruCache};

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: capacity={}, ttl={}s",
        config.capacity, config.ttl
    );

    let mut cache: LruCache<String, String> = LruCache::from_config(&config)
        .with_context(|| format!("cannot build cache from {:?}", config))?;

    for i in 0..5 {
        cache.set(format!("user:{}", i), format!("profile-{}", i));
    }
    for key in ["user:0", "user:3", "user:missing"] {
        let found = cache.get(key).is_some();
        info!(key, found, "lookup");
    }
    cache.delete("user:1");

    println!("keys (least to most recent): {:?}", cache.keys());
    println!("{}", serde_json::to_string_pretty(&cache.stats())?);

    info!("Demo complete");
    Ok(())
}
