use serde::{Deserialize, Serialize};

use super::query::DateRangePolicy;

/// Settings of the sales dashboard client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the sales API, without trailing slash (e.g. "http://localhost:5000/api")
    pub api_base: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_ms: Option<u32>,
    /// Handling of date ranges whose end precedes the start
    pub date_range_policy: DateRangePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000/api".to_string(),
            request_timeout_ms: Some(30_000),
            date_range_policy: DateRangePolicy::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of an endpoint path with its query string
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.api_base, path_and_query)
    }
}
