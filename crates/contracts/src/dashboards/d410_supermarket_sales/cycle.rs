use futures::future::{AbortRegistration, Abortable, LocalBoxFuture};
use serde_json::Value;

use super::dto::{DashboardSnapshot, Endpoint};
use super::error::DashboardError;
use super::normalize::{
    normalize_branch, normalize_demographics, normalize_product_line, normalize_summary,
    normalize_time_series,
};
use super::query::QueryParameters;

/// Where a cycle gets its JSON bodies from.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the UI thread.
pub trait SalesDataSource {
    /// Decoded JSON body of `endpoint` for the given query
    fn fetch<'a>(
        &'a self,
        endpoint: Endpoint,
        query: &'a QueryParameters,
    ) -> LocalBoxFuture<'a, Result<Value, DashboardError>>;
}

/// Issue the five requests together and wait for all of them.
///
/// The first failure ends the join; no partial snapshot is ever built.
pub async fn fetch_snapshot<S>(
    source: &S,
    query: &QueryParameters,
) -> Result<DashboardSnapshot, DashboardError>
where
    S: SalesDataSource + ?Sized,
{
    let summary = async { normalize_summary(source.fetch(Endpoint::Summary, query).await?) };
    let sales_by_branch =
        async { normalize_branch(source.fetch(Endpoint::SalesByBranch, query).await?) };
    let sales_by_product_line = async {
        normalize_product_line(source.fetch(Endpoint::SalesByProductLine, query).await?)
    };
    let sales_over_time =
        async { normalize_time_series(source.fetch(Endpoint::SalesOverTime, query).await?) };
    let demographics = async {
        normalize_demographics(source.fetch(Endpoint::CustomerDemographics, query).await?)
    };

    let (summary, sales_by_branch, sales_by_product_line, sales_over_time, demographics) = futures::try_join!(
        summary,
        sales_by_branch,
        sales_by_product_line,
        sales_over_time,
        demographics
    )?;

    Ok(DashboardSnapshot {
        summary,
        sales_by_branch,
        sales_by_product_line,
        sales_over_time,
        demographics,
    })
}

/// One started round of fetches, tagged with the generation that started it
#[derive(Debug)]
pub struct Cycle {
    generation: u64,
    query: QueryParameters,
    registration: AbortRegistration,
}

impl Cycle {
    pub(crate) fn new(
        generation: u64,
        query: QueryParameters,
        registration: AbortRegistration,
    ) -> Self {
        Self {
            generation,
            query,
            registration,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    /// Fetch and normalize; resolves early with no payload once superseded
    pub async fn run<S>(self, source: &S) -> CycleResult
    where
        S: SalesDataSource + ?Sized,
    {
        let Cycle {
            generation,
            query,
            registration,
        } = self;

        let outcome = Abortable::new(fetch_snapshot(source, &query), registration)
            .await
            .ok();

        CycleResult {
            generation,
            outcome,
        }
    }
}

/// What a cycle brought back
#[derive(Debug)]
pub struct CycleResult {
    pub generation: u64,
    /// `None` when the cycle was aborted
    pub outcome: Option<Result<DashboardSnapshot, DashboardError>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_supermarket_sales::testing::FakeSource;
    use futures::executor::block_on;

    #[test]
    fn test_fetch_snapshot_requests_every_endpoint_with_same_query() {
        let source = FakeSource::healthy();
        let mut query = QueryParameters::new();
        query.insert("branch", "A");

        let snapshot = block_on(fetch_snapshot(&source, &query)).unwrap();

        assert_eq!(snapshot.summary.total_customers, 1000);
        assert_eq!(snapshot.sales_by_branch.len(), 3);
        assert_eq!(snapshot.sales_over_time.len(), 2);
        assert_eq!(snapshot.demographics.gender.len(), 2);

        let calls = source.calls();
        assert_eq!(calls.len(), 5);
        for endpoint in Endpoint::ALL {
            assert!(calls.contains(&(endpoint, "branch=A".to_string())));
        }
    }

    #[test]
    fn test_fetch_snapshot_fails_when_one_request_fails() {
        let source = FakeSource::healthy().failing(Endpoint::SalesOverTime);
        let err = block_on(fetch_snapshot(&source, &QueryParameters::new())).unwrap_err();
        assert_eq!(err.endpoint(), Some(Endpoint::SalesOverTime));
    }

    #[test]
    fn test_fetch_snapshot_fails_on_malformed_body() {
        let source = FakeSource::healthy()
            .responding(Endpoint::Summary, serde_json::json!({"total_sales": 1.0}));
        let err = block_on(fetch_snapshot(&source, &QueryParameters::new())).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MalformedResponse {
                endpoint: Endpoint::Summary,
                ..
            }
        ));
    }

    #[test]
    fn test_aborted_cycle_yields_no_outcome() {
        let (handle, registration) = futures::future::AbortHandle::new_pair();
        let cycle = Cycle::new(7, QueryParameters::new(), registration);
        handle.abort();

        let result = block_on(cycle.run(&FakeSource::hanging()));
        assert_eq!(result.generation, 7);
        assert!(result.outcome.is_none());
    }
}
