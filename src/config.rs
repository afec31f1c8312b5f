//! Run configuration for archive retrieval and report output.
//!
//! Defaults match the public Chess.com API; the CLI overrides individual
//! values through the `with_*` builders.

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_REPORT_WIDTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Settings shared by the retrieval client, the driver and the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Base URL of the published-data API, without trailing slash
    pub api_base_url: String,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Directory the report file is written into
    pub output_dir: PathBuf,

    /// Column width used for separators and centered headings
    pub report_width: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            report_width: DEFAULT_REPORT_WIDTH,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_report_width(mut self, width: usize) -> Self {
        self.report_width = width;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make retrieval or report layout meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http") {
            return Err(ExtractorError::invalid_input(
                "api base url",
                format!("'{}' is not an http(s) URL", self.api_base_url),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ExtractorError::invalid_input(
                "timeout",
                "must be at least one second",
            ));
        }
        if self.report_width == 0 {
            return Err(ExtractorError::invalid_input(
                "report width",
                "must be greater than zero",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
