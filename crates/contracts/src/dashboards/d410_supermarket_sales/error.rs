use chrono::NaiveDate;
use thiserror::Error;

use super::dto::Endpoint;

/// Why a fetch cycle did not produce a snapshot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// The request did not complete: connection error, non-2xx status or timeout
    #[error("Request to {endpoint} failed: {message}")]
    NetworkFailure { endpoint: Endpoint, message: String },

    /// The body was not JSON or lacked the expected fields
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: Endpoint, message: String },

    /// Rejected before any request by `DateRangePolicy::Reject`
    #[error("Date range ends ({to}) before it starts ({from})")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },
}

impl DashboardError {
    pub fn network(endpoint: Endpoint, message: impl Into<String>) -> Self {
        DashboardError::NetworkFailure {
            endpoint,
            message: message.into(),
        }
    }

    pub fn malformed(endpoint: Endpoint, message: impl Into<String>) -> Self {
        DashboardError::MalformedResponse {
            endpoint,
            message: message.into(),
        }
    }

    /// Endpoint the failure came from, if any request was involved
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            DashboardError::NetworkFailure { endpoint, .. }
            | DashboardError::MalformedResponse { endpoint, .. } => Some(*endpoint),
            DashboardError::InvertedDateRange { .. } => None,
        }
    }
}
