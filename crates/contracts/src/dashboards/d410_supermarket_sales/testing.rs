//! In-memory data source for cycle and state tests

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

use super::cycle::SalesDataSource;
use super::dto::Endpoint;
use super::error::DashboardError;
use super::query::QueryParameters;

pub struct FakeSource {
    responses: HashMap<Endpoint, Result<Value, DashboardError>>,
    hang: bool,
    calls: RefCell<Vec<(Endpoint, String)>>,
}

impl FakeSource {
    /// Plausible bodies for all five endpoints
    pub fn healthy() -> Self {
        let responses = HashMap::from([
            (
                Endpoint::Summary,
                Ok(json!({
                    "total_sales": 322966.75,
                    "average_rating": 6.97,
                    "total_customers": 1000,
                    "product_lines": 6
                })),
            ),
            (
                Endpoint::SalesByBranch,
                Ok(json!({"A": 106200.37, "B": 106197.67, "C": 110568.71})),
            ),
            (
                Endpoint::SalesByProductLine,
                Ok(json!({"Food and beverages": 56144.84, "Sports and travel": 55122.83})),
            ),
            (
                Endpoint::SalesOverTime,
                Ok(json!([
                    {"Date": "2019-01-01", "Total": 4745.18},
                    {"Date": "2019-01-02", "Total": 1945.50}
                ])),
            ),
            (
                Endpoint::CustomerDemographics,
                Ok(json!({
                    "gender": {"Female": 501, "Male": 499},
                    "customer_type": {"Member": 501, "Normal": 499}
                })),
            ),
        ]);

        Self {
            responses,
            hang: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every request stays pending forever
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::healthy()
        }
    }

    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.responses.insert(
            endpoint,
            Err(DashboardError::network(endpoint, "connection refused")),
        );
        self
    }

    pub fn responding(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.responses.insert(endpoint, Ok(body));
        self
    }

    /// (endpoint, query string) of every request made so far
    pub fn calls(&self) -> Vec<(Endpoint, String)> {
        self.calls.borrow().clone()
    }
}

impl SalesDataSource for FakeSource {
    fn fetch<'a>(
        &'a self,
        endpoint: Endpoint,
        query: &'a QueryParameters,
    ) -> LocalBoxFuture<'a, Result<Value, DashboardError>> {
        self.calls
            .borrow_mut()
            .push((endpoint, query.to_query_string()));

        if self.hang {
            return future::pending().boxed_local();
        }

        let response = self
            .responses
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| Err(DashboardError::network(endpoint, "no fake response")));
        future::ready(response).boxed_local()
    }
}
