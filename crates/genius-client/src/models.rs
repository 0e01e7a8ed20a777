// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search response from the `/search` endpoint.
///
/// Only the fields needed to resolve a search term to an artist id are
/// modelled; every level defaults when absent so a sparse payload reads as
/// "no match" rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub response: SearchResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A single search hit wrapping the matched result record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(default)]
    pub result: HitResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitResult {
    #[serde(default)]
    pub primary_artist: Option<PrimaryArtist>,
}

/// Primary artist reference inside a search hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrimaryArtist {
    #[serde(default)]
    pub id: Option<u64>,
}

/// Full artist payload from the `/artists/{id}` endpoint, wrapper included.
///
/// The default value is the empty-but-well-formed payload returned when a
/// search produced no match: the envelope is present, the artist is not, so
/// callers never need a null check before descending.
///
/// Keys outside the modelled fields (the `meta` object, anything Genius adds
/// next to `artist`) are carried in the `extra` maps, so the payload
/// round-trips without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistPayload {
    #[serde(default)]
    pub response: ArtistEnvelope,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Artist attributes from Genius.
///
/// The named fields are the ones the tabular output needs; everything else
/// the API returns is preserved verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArtistPayload {
    /// Whether this is the empty payload produced by a no-match search.
    pub fn is_empty(&self) -> bool {
        self.response.artist.is_none()
    }

    /// Flatten the payload into a tabular row for `search_term`.
    ///
    /// Missing wrapper keys and missing artist fields each degrade to a null
    /// column; the `search_term` column is always populated.
    pub fn into_row(self, search_term: impl Into<String>) -> ArtistRow {
        let artist = self.response.artist.unwrap_or_default();
        ArtistRow {
            search_term: search_term.into(),
            artist_name: artist.name,
            artist_id: artist.id,
            followers_count: artist.followers_count,
        }
    }
}

/// One row of the tabular batch output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRow {
    pub search_term: String,
    pub artist_name: Option<String>,
    pub artist_id: Option<u64>,
    pub followers_count: Option<u64>,
}

impl ArtistRow {
    /// All-null row for a term whose lookup failed or found no match.
    pub fn empty(search_term: impl Into<String>) -> Self {
        ArtistRow {
            search_term: search_term.into(),
            artist_name: None,
            artist_id: None,
            followers_count: None,
        }
    }
}
