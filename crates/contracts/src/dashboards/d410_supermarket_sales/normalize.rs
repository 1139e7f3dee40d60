use serde_json::{Map, Value};

use super::dto::{
    CategoricalBreakdown, DemographicBreakdown, Endpoint, NamedValue, SummaryStats,
    TimeSeriesPoint,
};
use super::error::DashboardError;

/// `GET /summary` body to summary stats; every field is required
pub fn normalize_summary(raw: Value) -> Result<SummaryStats, DashboardError> {
    let endpoint = Endpoint::Summary;
    let object = as_object(endpoint, &raw)?;

    Ok(SummaryStats {
        total_sales: number_field(endpoint, object, "total_sales")?,
        average_rating: number_field(endpoint, object, "average_rating")?,
        total_customers: count_field(endpoint, object, "total_customers")?,
        product_line_count: count_field(endpoint, object, "product_lines")?,
    })
}

pub fn normalize_branch(raw: Value) -> Result<CategoricalBreakdown, DashboardError> {
    normalize_breakdown(Endpoint::SalesByBranch, &raw)
}

pub fn normalize_product_line(raw: Value) -> Result<CategoricalBreakdown, DashboardError> {
    normalize_breakdown(Endpoint::SalesByProductLine, &raw)
}

/// Records pass through unchanged
pub fn normalize_time_series(raw: Value) -> Result<Vec<TimeSeriesPoint>, DashboardError> {
    serde_json::from_value(raw)
        .map_err(|e| DashboardError::malformed(Endpoint::SalesOverTime, e.to_string()))
}

/// Absent (or null) sub-mappings become empty breakdowns
pub fn normalize_demographics(raw: Value) -> Result<DemographicBreakdown, DashboardError> {
    let endpoint = Endpoint::CustomerDemographics;
    let object = as_object(endpoint, &raw)?;

    let sub_breakdown = |key: &str| match object.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => normalize_breakdown(endpoint, value),
    };

    Ok(DemographicBreakdown {
        gender: sub_breakdown("gender")?,
        customer_type: sub_breakdown("customer_type")?,
    })
}

/// Name/value mapping to a breakdown, keeping the key order of the body
fn normalize_breakdown(
    endpoint: Endpoint,
    raw: &Value,
) -> Result<CategoricalBreakdown, DashboardError> {
    as_object(endpoint, raw)?
        .iter()
        .map(|(name, value)| {
            value
                .as_f64()
                .map(|value| NamedValue::new(name.clone(), value))
                .ok_or_else(|| {
                    DashboardError::malformed(
                        endpoint,
                        format!("value for '{}' is not a number: {}", name, value),
                    )
                })
        })
        .collect()
}

fn as_object(endpoint: Endpoint, raw: &Value) -> Result<&Map<String, Value>, DashboardError> {
    raw.as_object().ok_or_else(|| {
        DashboardError::malformed(endpoint, format!("expected a JSON object, got {}", raw))
    })
}

fn number_field(
    endpoint: Endpoint,
    object: &Map<String, Value>,
    key: &str,
) -> Result<f64, DashboardError> {
    match object.get(key) {
        Some(value) => value.as_f64().ok_or_else(|| {
            DashboardError::malformed(endpoint, format!("field '{}' is not a number", key))
        }),
        None => Err(DashboardError::malformed(
            endpoint,
            format!("missing field '{}'", key),
        )),
    }
}

/// Non-negative whole number that fits `u64`; `12.0` is accepted as 12
fn count_field(
    endpoint: Endpoint,
    object: &Map<String, Value>,
    key: &str,
) -> Result<u64, DashboardError> {
    let value = number_field(endpoint, object, key)?;
    if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(DashboardError::malformed(
            endpoint,
            format!("field '{}' is not a count: {}", key, value),
        ));
    }
    Ok(value as u64)
}
