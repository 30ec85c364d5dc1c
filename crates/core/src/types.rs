use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One entry of the stored track document.
///
/// The playlist page embeds these verbatim as its inline script constant,
/// so the field names match what the client player reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Cover image reference shown in the player thumbnail
    pub cover: String,
    /// Playable media reference
    pub url: String,
    /// Display duration in MM:SS form (optional in the stored document)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Track {
    /// Duration for display, with a placeholder when the document omits it
    pub fn duration_display(&self) -> &str {
        self.duration.as_deref().unwrap_or("?:??")
    }
}

/// Fixture entry returned by the `/api/tracks` placeholder endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub duration: String,
}

/// Parse the stored track document (a JSON array of track records).
///
/// An empty array is rejected: the player page is meaningless without at
/// least one track, and serving it would break the client's track cycling.
pub fn parse_track_list(raw: &str) -> Result<Vec<Track>> {
    let tracks: Vec<Track> = serde_json::from_str(raw)?;
    if tracks.is_empty() {
        return Err(Error::TrackData(
            "track document contains no tracks".to_string(),
        ));
    }
    Ok(tracks)
}

/// The illustrative track set served by the `/api/tracks` placeholder
pub fn fixture_tracks() -> Vec<ApiTrack> {
    let entries = [
        (1, "Midnight City", "M83", "4:03"),
        (2, "Somebody Told Me", "The Killers", "3:17"),
        (3, "Electric Feel", "MGMT", "3:49"),
        (4, "Take Me Out", "Franz Ferdinand", "3:57"),
        (5, "Pumped Up Kicks", "Foster the People", "3:59"),
        (6, "Seven Nation Army", "The White Stripes", "3:51"),
    ];
    entries
        .into_iter()
        .map(|(id, title, artist, duration)| ApiTrack {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration: duration.to_string(),
        })
        .collect()
}
