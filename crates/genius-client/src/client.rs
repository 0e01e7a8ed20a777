// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GeniusError, Result};
use crate::models::{ArtistPayload, ArtistRow, SearchResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

const GENIUS_API_BASE: &str = "https://api.genius.com";
const USER_AGENT: &str = concat!("genius-client/", env!("CARGO_PKG_VERSION"));

/// Genius API client.
///
/// Immutable after construction; holds the bearer credential applied to
/// every outbound request. Cloning is cheap, so multiple handles (e.g. one
/// pointed at a test server) can coexist.
#[derive(Debug, Clone)]
pub struct GeniusClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl GeniusClient {
    /// Create a client with default settings for the given access token.
    ///
    /// Performs no network activity.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder(access_token).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(access_token: impl Into<String>) -> GeniusClientBuilder {
        GeniusClientBuilder::new(access_token)
    }

    /// Resolve a free-text search term to the primary-artist id of the
    /// first search hit.
    ///
    /// Returns `Ok(None)` when there are no hits or the first hit carries no
    /// identifier; transport and HTTP failures propagate.
    async fn lookup_artist_id(&self, search_term: &str) -> Result<Option<u64>> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| GeniusError::InvalidResponse(e.to_string()))?;
        url.query_pairs_mut().append_pair("q", search_term);

        let results: SearchResponse = self.get(url.as_str()).await?;

        Ok(results
            .response
            .hits
            .first()
            .and_then(|hit| hit.result.primary_artist.as_ref())
            .and_then(|artist| artist.id))
    }

    /// Fetch the full artist payload for a free-text search term.
    ///
    /// Issues one request to the search endpoint and, when a match is found,
    /// a second to the artist-detail endpoint. The detail response is
    /// returned with its wrapper intact; [`ArtistPayload::into_row`] is the
    /// supported way to unwrap it. A no-match search returns the empty
    /// payload rather than an error.
    ///
    /// Any transport or HTTP failure on either request surfaces as an `Err`.
    ///
    /// # Example
    /// ```no_run
    /// # use genius_client::GeniusClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeniusClient::new("token")?;
    /// let payload = client.get_artist("Radiohead").await?;
    /// if let Some(artist) = payload.response.artist {
    ///     println!("{:?} has id {:?}", artist.name, artist.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_artist(&self, search_term: &str) -> Result<ArtistPayload> {
        let Some(artist_id) = self.lookup_artist_id(search_term).await? else {
            debug!(target: "genius", "no artist match for {:?}", search_term);
            return Ok(ArtistPayload::default());
        };

        let url = format!("{}/artists/{}", self.base_url, artist_id);
        self.get(&url).await
    }

    /// Fetch artist rows for a batch of search terms.
    ///
    /// Terms are processed sequentially in input order and the output always
    /// has one row per term, duplicates included. A term whose lookup fails
    /// is logged and degrades to an all-null row; a term with no match
    /// yields a null row without being treated as an error. This method
    /// never fails as a whole.
    ///
    /// # Example
    /// ```no_run
    /// # use genius_client::GeniusClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeniusClient::new("token")?;
    /// let rows = client.get_artists(["Radiohead", "Björk"]).await;
    /// assert_eq!(rows.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_artists<I, S>(&self, search_terms: I) -> Vec<ArtistRow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = Vec::new();

        for term in search_terms {
            let term = term.as_ref();
            match self.fetch_row(term).await {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(target: "genius", "lookup for {:?} failed: {}", term, e);
                    rows.push(ArtistRow::empty(term));
                }
            }
        }

        rows
    }

    /// Per-term worker for the batch path.
    async fn fetch_row(&self, search_term: &str) -> Result<ArtistRow> {
        let payload = self.get_artist(search_term).await?;
        Ok(payload.into_row(search_term))
    }

    /// Internal method to perform authenticated GET requests.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        trace!(target: "genius", "GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        debug!(target: "genius", "response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeniusError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "genius", "response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            GeniusError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}

/// Builder for configuring a Genius client.
#[derive(Debug)]
pub struct GeniusClientBuilder {
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl GeniusClientBuilder {
    fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: GENIUS_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the Genius client.
    pub fn build(self) -> Result<GeniusClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(GeniusClient {
            client,
            base_url: self.base_url,
            access_token: self.access_token,
        })
    }
}
