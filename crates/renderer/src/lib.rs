//! Renders the playlist page served on every non-API route.
//!
//! The renderer is a pure function of the request URL, the fetched track
//! list, and the site metadata. Track data is interpolated twice: the
//! visible song list is rendered server-side, and the same records are
//! embedded as an inline script constant for the client player.

pub mod assets;
pub mod escape;

use distortion_core::config::SiteConfig;
use distortion_core::{Error, Result};
use distortion_core::types::Track;
use escape::{escape_html, json_for_script};

/// Render the complete HTML document for the playlist page.
///
/// `page_url` is the absolute URL of the incoming request; it ends up in
/// the Open Graph and Twitter metadata so link previews match the
/// deployed host.
pub fn render_document(page_url: &str, tracks: &[Track], site: &SiteConfig) -> Result<String> {
    let url = escape_html(page_url);
    let title = escape_html(&site.title);
    let description = escape_html(&site.description);
    let og_image = escape_html(&site.og_image);
    let playlist = escape_html(&site.playlist);

    let tracks_json = json_for_script(&tracks)?;
    let song_list = render_song_list(tracks);
    let stats = render_hero_stats(tracks);

    // First track seeds the bottom player before any interaction
    let first = tracks
        .first()
        .ok_or_else(|| Error::TrackData("cannot render a page with no tracks".to_string()))?;
    let first_title = escape_html(&first.title);
    let first_artist = escape_html(&first.artist);
    let first_cover = escape_html(&first.cover);

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="website">
    <meta property="og:url" content="{url}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{og_image}">

    <!-- Twitter -->
    <meta property="twitter:card" content="summary_large_image">
    <meta property="twitter:url" content="{url}">
    <meta property="twitter:title" content="{title}">
    <meta property="twitter:description" content="{description}">
    <meta property="twitter:image" content="{og_image}">

    <link rel="icon" type="image/svg+xml" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🎵</text></svg>">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap" rel="stylesheet">
    <style>{styles}</style>
</head>
<body>
    <audio src="" id="audio" crossOrigin="anonymous"></audio>
    <div class="app-layout">
        <div class="sidebar">
            <div class="logo">🎵 {playlist}</div>

            <nav class="nav-section">
                <div class="nav-title">Discover</div>
                <a href="#" class="nav-item active">Home</a>
                <a href="#" class="nav-item">Search</a>
                <a href="#" class="nav-item">Browse</a>
            </nav>

            <div class="nav-section">
                <div class="nav-title">Library</div>
                <a href="#" class="nav-item">Songs</a>
                <a href="#" class="nav-item">Albums</a>
                <a href="#" class="nav-item">Artists</a>
            </div>

            <div class="nav-section">
                <div class="nav-title">Playlists</div>
                <a href="#" class="playlist-item active">{playlist}</a>
            </div>
        </div>

        <main class="main-content">
            <header class="main-header">
                <input type="text" class="search-bar" placeholder="Search for songs, artists, albums...">
            </header>

            <section class="hero-section fade-in">
                <h1>{playlist}</h1>
                <p>{description}</p>
                {stats}
                <div class="hero-actions">
                    <button class="btn btn-primary" id="playBtn">▶ Play All</button>
                </div>
            </section>

            <section class="content-section fade-in">
                <h2 class="section-title">Tracks</h2>
                <div class="song-list">
{song_list}                </div>
            </section>
        </main>

        <div class="bottom-player">
            <div class="progress-container">
                <div class="progress-bar"></div>
            </div>

            <div class="player-track">
                <img src="{first_cover}" alt="Now Playing: {first_title}" class="player-thumbnail">
                <div class="player-info">
                    <div class="track-title">{first_title}</div>
                    <div class="track-artist">{first_artist}</div>
                </div>
            </div>

            <div class="player-controls">
                <button class="control-btn" id="prevBtn" title="Previous track">⏮</button>
                <button class="control-btn play-pause" id="playPauseBtn" title="Play/Pause">▶</button>
                <button class="control-btn" id="nextBtn" title="Next track">⏭</button>
            </div>
        </div>
    </div>

    <script>
        const tracks = {tracks_json};
{player_script}    </script>
    <canvas id="visualizer"></canvas>
</body>
</html>"##,
        styles = assets::STYLES,
        player_script = assets::PLAYER_SCRIPT,
    ))
}

fn render_song_list(tracks: &[Track]) -> String {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let active = if i == 0 { " active" } else { "" };
            format!(
                r#"                    <div class="song-item{active}" data-track="{i}">
                        <span class="song-number">{number}</span>
                        <div class="song-info">
                            <div class="song-title">{title}</div>
                            <div class="song-artist">{artist}</div>
                        </div>
                        <span class="song-duration">{duration}</span>
                    </div>
"#,
                number = i + 1,
                title = escape_html(&track.title),
                artist = escape_html(&track.artist),
                duration = escape_html(track.duration_display()),
            )
        })
        .collect()
}

fn render_hero_stats(tracks: &[Track]) -> String {
    let count = tracks.len();
    let noun = if count == 1 { "Song" } else { "Songs" };
    match total_duration_display(tracks) {
        Some(total) => format!(
            r#"<div class="hero-stats">
                    <div class="stat-item"><span>{count}</span> <small>{noun}</small></div>
                    <div class="stat-item"><span>{total}</span> <small>Duration</small></div>
                </div>"#,
        ),
        None => format!(
            r#"<div class="hero-stats">
                    <div class="stat-item"><span>{count}</span> <small>{noun}</small></div>
                </div>"#,
        ),
    }
}

/// Sum the MM:SS display durations into an "Nh Nm" / "Nm" total.
///
/// Returns `None` when no track carries a parseable duration.
fn total_duration_display(tracks: &[Track]) -> Option<String> {
    let mut total_secs: u64 = 0;
    let mut seen = false;
    for track in tracks {
        if let Some(secs) = track.duration.as_deref().and_then(parse_duration_secs) {
            total_secs += secs;
            seen = true;
        }
    }
    if !seen {
        return None;
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    if hours > 0 {
        Some(format!("{}h {}m", hours, minutes))
    } else {
        Some(format!("{}m", minutes))
    }
}

fn parse_duration_secs(s: &str) -> Option<u64> {
    let (mins, secs) = s.split_once(':')?;
    let mins: u64 = mins.parse().ok()?;
    let secs: u64 = secs.parse().ok()?;
    if secs >= 60 {
        return None;
    }
    Some(mins * 60 + secs)
}
