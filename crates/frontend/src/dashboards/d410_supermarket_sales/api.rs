use contracts::dashboards::d410_supermarket_sales::{
    DashboardConfig, DashboardError, Endpoint, QueryParameters, SalesDataSource,
};
use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

/// Sales API over `fetch`, one GET per endpoint
#[derive(Debug, Clone)]
pub struct HttpSalesSource {
    config: DashboardConfig,
}

impl HttpSalesSource {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn url(&self, endpoint: Endpoint, query: &QueryParameters) -> String {
        self.config.url_for(&query.append_to(endpoint.path()))
    }
}

impl SalesDataSource for HttpSalesSource {
    fn fetch<'a>(
        &'a self,
        endpoint: Endpoint,
        query: &'a QueryParameters,
    ) -> LocalBoxFuture<'a, Result<Value, DashboardError>> {
        let url = self.url(endpoint, query);
        let request = get_json(endpoint, url);

        match self.config.request_timeout_ms {
            Some(timeout_ms) => with_timeout(endpoint, request, timeout_ms).boxed_local(),
            None => request.boxed_local(),
        }
    }
}

async fn get_json(endpoint: Endpoint, url: String) -> Result<Value, DashboardError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| DashboardError::network(endpoint, format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(DashboardError::network(
            endpoint,
            format!("HTTP error: {}", response.status()),
        ));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| DashboardError::malformed(endpoint, format!("Failed to parse response: {}", e)))
}

async fn with_timeout<F>(
    endpoint: Endpoint,
    request: F,
    timeout_ms: u32,
) -> Result<Value, DashboardError>
where
    F: std::future::Future<Output = Result<Value, DashboardError>>,
{
    let request = Box::pin(request);
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(DashboardError::network(
            endpoint,
            format!("Timed out after {} ms", timeout_ms),
        )),
    }
}
