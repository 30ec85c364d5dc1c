use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any,
};
use distortion_core::config::{Config, SiteConfig};
use distortion_core::types::{ApiTrack, fixture_tracks, parse_track_list};
use distortion_renderer::render_document;
use distortion_store::{TrackStore, build_store};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;

/// Shared request-handling state: the store client plus immutable config.
/// Nothing here is mutated by a request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TrackStore>,
    store_key: String,
    fetch_timeout: Duration,
    site: SiteConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn TrackStore>, config: &Config) -> Self {
        Self {
            store,
            store_key: config.store.key.clone(),
            fetch_timeout: config.store.timeout,
            site: config.site.clone(),
        }
    }
}

/// Start the server with the given config file.
///
/// # Arguments
///
/// * `config_path` - Path to server.toml
/// * `port` - Optional override of the configured port
pub async fn run(config_path: PathBuf, port: Option<u16>) -> Result<()> {
    println!("🎵 Starting High Distortion server...");
    println!("   Config: {}", config_path.display());

    let config = distortion_core::parse_config(&config_path)
        .context("Failed to parse server config")?;
    let store = build_store(&config.store).context("Failed to build track store")?;

    println!("   ✓ Playlist: {}", config.site.playlist);
    println!("   ✓ Store key: {}", config.store.key);

    let state = AppState::new(store, &config);
    let app = build_app(state);

    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to port")?;

    println!("\n🚀 Serving at: http://{}", addr);
    println!("   Press Ctrl+C to stop\n");
    info!(addr = %addr, "listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Build the application router.
///
/// Dispatch order, first match wins: OPTIONS preflight (any path), the two
/// `/api` endpoints, then the fallback which answers unknown `/api/` names
/// with a JSON 404 and everything else with the rendered document.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/tracks", any(api_tracks))
        .route("/api/search", any(api_search))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(preflight))
}

/// Answer CORS preflight before any routing happens
async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return (
            StatusCode::NO_CONTENT,
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    "GET, POST, PUT, DELETE, OPTIONS",
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    "Content-Type, Authorization",
                ),
            ],
        )
            .into_response();
    }
    next.run(req).await
}

#[derive(Serialize)]
struct TracksResponse {
    tracks: Vec<ApiTrack>,
}

/// `/api/tracks` — placeholder fixture, not a store query
async fn api_tracks() -> Json<TracksResponse> {
    Json(TracksResponse {
        tracks: fixture_tracks(),
    })
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Serialize)]
struct SearchResponse {
    query: Option<String>,
    results: Vec<serde_json::Value>,
}

/// `/api/search` — echoes the query; an absent `q` is null, not an error
async fn api_search(Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    Json(SearchResponse {
        query: params.q,
        results: Vec::new(),
    })
}

/// Everything the explicit routes did not claim: unknown API endpoints get
/// the JSON 404, any other path gets the rendered playlist page.
async fn fallback(State(state): State<AppState>, req: Request) -> Result<Response, AppError> {
    if req.uri().path().starts_with("/api/") {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Endpoint not found" })),
        )
            .into_response());
    }
    serve_document(&state, req).await
}

async fn serve_document(state: &AppState, req: Request) -> Result<Response, AppError> {
    let page_url = request_url(req.headers(), req.uri());

    let fetched = timeout(state.fetch_timeout, state.store.get(&state.store_key))
        .await
        .map_err(|_| AppError::Timeout(state.store_key.clone()))?
        .map_err(AppError::Store)?;
    let raw = fetched.ok_or_else(|| AppError::MissingTrackData(state.store_key.clone()))?;

    let tracks = parse_track_list(&raw).map_err(AppError::TrackData)?;
    let html = render_document(&page_url, &tracks, &state.site).map_err(AppError::Render)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=UTF-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            (header::X_FRAME_OPTIONS, "DENY"),
            (HeaderName::from_static("x-xss-protection"), "1; mode=block"),
            (
                header::REFERRER_POLICY,
                "strict-origin-when-cross-origin",
            ),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        html,
    )
        .into_response())
}

/// Reconstruct the absolute request URL from the Host and
/// X-Forwarded-Proto headers, for the page's social metadata
fn request_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or("localhost");
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}://{}{}", scheme, host, path_and_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use distortion_store::MemoryStore;
    use tower::ServiceExt;

    const TRACK_DOC: &str = r#"[
        {
            "title": "Midnight City",
            "artist": "M83",
            "cover": "https://example.com/dreaming.jpg",
            "url": "https://example.com/midnight-city.mp3",
            "duration": "4:03"
        },
        {
            "title": "Seven Nation Army",
            "artist": "The White Stripes",
            "cover": "https://example.com/elephant.jpg",
            "url": "https://example.com/seven-nation-army.mp3",
            "duration": "3:51"
        }
    ]"#;

    fn test_config() -> Config {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8787

[store]
backend = "file"
root = "unused"
key = "music-data.json"
timeout_secs = 1
        "#;
        distortion_core::config::parse_config_str(toml).unwrap()
    }

    fn app_with_document(doc: Option<&str>) -> Router {
        let store = match doc {
            Some(doc) => MemoryStore::with_entry("music-data.json", doc),
            None => MemoryStore::new(),
        };
        build_app(AppState::new(Arc::new(store), &test_config()))
    }

    async fn send(app: Router, req: HttpRequest<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        (status, headers, body)
    }

    #[tokio::test]
    async fn options_returns_204_with_cors_headers_on_any_path() {
        for path in ["/", "/api/tracks", "/anything/else"] {
            let req = HttpRequest::builder()
                .method(Method::OPTIONS)
                .uri(path)
                .body(Body::empty())
                .unwrap();
            let (status, headers, body) = send(app_with_document(None), req).await;

            assert_eq!(status, StatusCode::NO_CONTENT, "path {}", path);
            assert!(body.is_empty(), "preflight body must be empty");
            assert_eq!(headers["access-control-allow-origin"], "*");
            assert_eq!(
                headers["access-control-allow-methods"],
                "GET, POST, PUT, DELETE, OPTIONS"
            );
            assert_eq!(
                headers["access-control-allow-headers"],
                "Content-Type, Authorization"
            );
        }
    }

    #[tokio::test]
    async fn api_tracks_returns_fixture() {
        let req = HttpRequest::builder()
            .uri("/api/tracks")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(app_with_document(None), req).await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            headers["content-type"]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let tracks = parsed["tracks"].as_array().unwrap();
        assert!(!tracks.is_empty());
        for track in tracks {
            assert!(track["id"].is_u64());
            assert!(track["title"].is_string());
            assert!(track["artist"].is_string());
            assert!(track["duration"].is_string());
        }
    }

    #[tokio::test]
    async fn api_tracks_accepts_any_method() {
        let req = HttpRequest::builder()
            .method(Method::POST)
            .uri("/api/tracks")
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(app_with_document(None), req).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_search_echoes_query() {
        let req = HttpRequest::builder()
            .uri("/api/search?q=foo")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(app_with_document(None), req).await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["query"], "foo");
        assert_eq!(parsed["results"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn api_search_without_query_is_null_not_error() {
        let req = HttpRequest::builder()
            .uri("/api/search")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(app_with_document(None), req).await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed["query"].is_null());
        assert_eq!(parsed["results"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn unknown_api_endpoint_returns_json_404() {
        for path in ["/api/doesnotexist", "/api/", "/api/tracks/extra"] {
            let req = HttpRequest::builder().uri(path).body(Body::empty()).unwrap();
            let (status, _, body) = send(app_with_document(None), req).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "path {}", path);
            let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(parsed["error"], "Endpoint not found");
        }
    }

    #[tokio::test]
    async fn document_route_serves_html_with_request_url() {
        let req = HttpRequest::builder()
            .uri("/some/path?x=1")
            .header(header::HOST, "music.example.com")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(app_with_document(Some(TRACK_DOC)), req).await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            headers["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert_eq!(headers["cache-control"], "public, max-age=86400");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-xss-protection"], "1; mode=block");
        assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
        assert_eq!(headers["access-control-allow-origin"], "*");

        let html = String::from_utf8(body).unwrap();
        assert!(html.contains(
            r#"<meta property="og:url" content="http://music.example.com/some/path?x=1">"#
        ));
        assert!(html.contains("Midnight City"));
    }

    #[tokio::test]
    async fn document_respects_forwarded_proto() {
        let req = HttpRequest::builder()
            .uri("/")
            .header(header::HOST, "music.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let (_, _, body) = send(app_with_document(Some(TRACK_DOC)), req).await;
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains(r#"content="https://music.example.com/""#));
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let make_req = || {
            HttpRequest::builder()
                .uri("/playlist")
                .header(header::HOST, "music.example.com")
                .body(Body::empty())
                .unwrap()
        };
        let (_, _, first) = send(app_with_document(Some(TRACK_DOC)), make_req()).await;
        let (_, _, second) = send(app_with_document(Some(TRACK_DOC)), make_req()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn store_miss_returns_502_json() {
        let req = HttpRequest::builder().uri("/").body(Body::empty()).unwrap();
        let (status, headers, body) = send(app_with_document(None), req).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(
            headers["content-type"]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(
            parsed["error"]
                .as_str()
                .unwrap()
                .contains("music-data.json")
        );
    }

    #[tokio::test]
    async fn invalid_track_document_returns_502_json() {
        let req = HttpRequest::builder().uri("/").body(Body::empty()).unwrap();
        let (status, _, body) = send(app_with_document(Some("not json")), req).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("invalid"));
    }

    #[test]
    fn request_url_reconstruction() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "music.example.com".parse().unwrap());
        let uri: Uri = "/a/b?q=1".parse().unwrap();
        assert_eq!(
            request_url(&headers, &uri),
            "http://music.example.com/a/b?q=1"
        );

        // Without a Host header we still produce a well-formed URL
        let empty = HeaderMap::new();
        assert_eq!(request_url(&empty, &uri), "http://localhost/a/b?q=1");
    }
}
