use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Raw TOML configuration structure
/// This matches the server.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    server: RawServer,
    store: RawStore,
    #[serde(default)]
    site: Option<RawSite>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: String,
    port: u16,
}

#[derive(Debug, Deserialize)]
struct RawStore {
    backend: String, // "http" or "file"
    url: Option<String>,
    root: Option<String>,
    key: String,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: Option<String>,
    description: Option<String>,
    og_image: Option<String>,
    playlist: Option<String>,
}

/// Where the server binds
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which key-value backend supplies the track document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Remote store reached over HTTP (`GET <url>/<key>`)
    Http { url: String },
    /// Local directory of documents, for development
    File { root: PathBuf },
}

/// Track store access configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Key of the stored track-list JSON document
    pub key: String,
    /// Bound on the render-time store fetch
    pub timeout: Duration,
}

/// Page metadata interpolated into the served document
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub og_image: String,
    pub playlist: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "High Distortion - Music Streaming".to_string(),
            description: "Curated playlist featuring the best of alternative and indie rock"
                .to_string(),
            og_image:
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=1200&h=630&fit=crop"
                    .to_string(),
            playlist: "High Distortion".to_string(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub site: SiteConfig,
}

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Parse server.toml from a file path
pub fn parse_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse server.toml from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)?;

    let backend = match raw.store.backend.as_str() {
        "http" => {
            let url = raw.store.url.ok_or_else(|| {
                Error::ConfigParse("store.url is required for the http backend".to_string())
            })?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::ConfigParse(format!(
                    "store.url must be an http(s) URL, got '{}'",
                    url
                )));
            }
            StoreBackend::Http {
                url: url.trim_end_matches('/').to_string(),
            }
        }
        "file" => {
            let root = raw.store.root.ok_or_else(|| {
                Error::ConfigParse("store.root is required for the file backend".to_string())
            })?;
            StoreBackend::File {
                root: PathBuf::from(root),
            }
        }
        other => {
            return Err(Error::ConfigParse(format!(
                "Unknown store backend '{}', expected 'http' or 'file'",
                other
            )));
        }
    };

    if raw.store.key.trim().is_empty() {
        return Err(Error::ConfigParse("store.key must not be empty".to_string()));
    }

    let timeout_secs = raw.store.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(Error::ConfigParse(
            "store.timeout_secs must be at least 1".to_string(),
        ));
    }

    let defaults = SiteConfig::default();
    let site = match raw.site {
        Some(s) => SiteConfig {
            title: s.title.unwrap_or(defaults.title),
            description: s.description.unwrap_or(defaults.description),
            og_image: s.og_image.unwrap_or(defaults.og_image),
            playlist: s.playlist.unwrap_or(defaults.playlist),
        },
        None => defaults,
    };

    Ok(Config {
        server: ServerConfig {
            host: raw.server.host,
            port: raw.server.port,
        },
        store: StoreConfig {
            backend,
            key: raw.store.key,
            timeout: Duration::from_secs(timeout_secs),
        },
        site,
    })
}
