use anyhow::{Context, Result};
use distortion_core::parse_config;
use distortion_core::types::parse_track_list;
use distortion_store::build_store;
use std::path::PathBuf;

/// Fetch the stored track document and validate it.
///
/// Exits non-zero when the store is unreachable, the key is missing, or
/// the document fails to parse, so it can gate deploys from CI.
pub async fn run(config_path: PathBuf) -> Result<()> {
    println!("🎵 Checking track document...");
    println!("   Config: {}", config_path.display());

    let config = parse_config(&config_path).context("Failed to parse server config")?;
    let store = build_store(&config.store).context("Failed to build track store")?;

    let raw = tokio::time::timeout(config.store.timeout, store.get(&config.store.key))
        .await
        .with_context(|| format!("Timed out fetching '{}'", config.store.key))?
        .context("Store fetch failed")?
        .with_context(|| format!("Key '{}' not found in store", config.store.key))?;

    let tracks = parse_track_list(&raw).context("Track document failed validation")?;

    println!("   ✓ Key: {}", config.store.key);
    for (i, track) in tracks.iter().enumerate() {
        println!(
            "   {:2}. {} - {} ({})",
            i + 1,
            track.title,
            track.artist,
            track.duration_display()
        );
    }
    println!("\n✅ {} tracks OK", tracks.len());

    Ok(())
}
