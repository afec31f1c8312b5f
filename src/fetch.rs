//! Archive retrieval from the Chess.com published-data API.
//!
//! A month is a single PGN download. A whole year goes through the
//! archive list endpoint, keeps the monthly archives of that year and
//! concatenates their PGN bodies. "No data" is an empty string, never an
//! error, so the caller can tell it apart from a transport failure.

use crate::config::ExtractorConfig;
use crate::constants::ACCEPT_HEADER;
use crate::error::{ExtractorError, Result};
use crate::models::Period;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Body of the `games/archives` endpoint
#[derive(Debug, Deserialize)]
struct ArchiveList {
    #[serde(default)]
    archives: Vec<String>,
}

/// Extract the monthly archive URLs from an archive-list JSON document
///
/// Malformed JSON or a missing `archives` field yields an empty list.
pub fn parse_archive_list(json: &str) -> Vec<String> {
    match serde_json::from_str::<ArchiveList>(json) {
        Ok(list) => list
            .archives
            .into_iter()
            .filter(|url| url.starts_with("http"))
            .collect(),
        Err(e) => {
            warn!("Could not parse archive list: {}", e);
            Vec::new()
        }
    }
}

/// Keep the archive URLs whose `.../<YYYY>/<MM>` suffix names `year`
pub fn archives_for_year(urls: &[String], year: u16) -> Vec<String> {
    let year = format!("{:04}", year);
    urls.iter()
        .filter(|url| {
            let mut segments = url.trim_end_matches('/').rsplit('/');
            let _month = segments.next();
            segments.next() == Some(year.as_str())
        })
        .cloned()
        .collect()
}

/// HTTP client for game archives
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/player/{user}/games/{YYYY}/{MM}/pgn`
    pub fn monthly_pgn_url(&self, username: &str, year: u16, month: u8) -> String {
        format!(
            "{}/player/{}/games/{:04}/{:02}/pgn",
            self.base_url,
            username.trim(),
            year,
            month
        )
    }

    /// `{base}/player/{user}/games/archives`
    pub fn archive_list_url(&self, username: &str) -> String {
        format!("{}/player/{}/games/archives", self.base_url, username.trim())
    }

    /// Fetch every game of `period` as one PGN text blob
    pub async fn fetch_period(&self, username: &str, period: &Period) -> Result<String> {
        match *period {
            Period::Month { year, month } => {
                let url = self.monthly_pgn_url(username, year, month);
                info!("Fetching data from: {}", url);
                self.fetch_text(&url).await
            }
            Period::Year { year } => self.fetch_year(username, year).await,
        }
    }

    async fn fetch_year(&self, username: &str, year: u16) -> Result<String> {
        let list_url = self.archive_list_url(username);
        info!("Fetching annual game archives for {} from: {}", year, list_url);

        let body = self.fetch_text(&list_url).await?;
        let monthly = archives_for_year(&parse_archive_list(&body), year);
        if monthly.is_empty() {
            info!("No monthly archives found for {}", year);
            return Ok(String::new());
        }
        info!("Found {} monthly archive(s)", monthly.len());

        let mut combined = String::new();
        for (index, archive_url) in monthly.iter().enumerate() {
            debug!("Fetching archive {} of {}", index + 1, monthly.len());
            let pgn_url = format!("{}/pgn", archive_url.trim_end_matches('/'));
            match self.fetch_text(&pgn_url).await {
                Ok(pgn) if !pgn.is_empty() => {
                    combined.push_str(&pgn);
                    combined.push('\n');
                }
                Ok(_) => debug!("Archive {} is empty", pgn_url),
                Err(e) => warn!("Skipping archive {}: {}", archive_url, e),
            }
        }

        Ok(combined)
    }

    /// GET a text body; 404 is an empty body, other non-200 statuses fail
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!("No games found at: {}", url);
            return Ok(String::new());
        }
        if status != StatusCode::OK {
            return Err(ExtractorError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
