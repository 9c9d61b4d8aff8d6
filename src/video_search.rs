//! # Video Search Collaborator
//!
//! This module wraps the external video lookup: given a recipe title, it
//! queries the YouTube search API for a matching cooking video and returns
//! its identifier. Any failure (transport, timeout, decode, or simply no
//! results) degrades to `None`; a missing video must never fail the
//! overall request. There is no retry policy.

use crate::catalog_config::VideoSearchConfig;
use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Client for the external video-title lookup
#[derive(Debug)]
pub struct VideoSearchClient {
    config: VideoSearchConfig,
    client: reqwest::Client,
}

impl VideoSearchClient {
    /// Build a client; fails only if the HTTP client cannot be constructed
    pub fn new(config: VideoSearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for video search")?;
        Ok(Self { config, client })
    }

    /// Look up a video id for a recipe title
    ///
    /// Returns `None` when no video is found or the lookup fails for any
    /// reason; the failure is logged, never propagated.
    pub async fn lookup_video_id(&self, title: &str) -> Option<String> {
        match self.search(title).await {
            Ok(video_id) => video_id,
            Err(err) => {
                warn!("Video lookup failed for '{}': {:#}", title, err);
                None
            }
        }
    }

    async fn search(&self, title: &str) -> Result<Option<String>> {
        let query = format!("{title} recipe in English");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("type", "video"),
                ("maxResults", "1"),
                ("relevanceLanguage", "en"),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .context("Video search request failed")?
            .error_for_status()
            .context("Video search returned an error status")?;

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to decode video search response")?;

        let video_id = body.items.into_iter().next().and_then(|item| item.id.video_id);
        if video_id.is_some() {
            info!("Found video for '{}'", title);
        } else {
            info!("No video found for '{}'", title);
        }
        Ok(video_id)
    }
}
