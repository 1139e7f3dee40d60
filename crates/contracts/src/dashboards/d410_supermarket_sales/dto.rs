use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only endpoints of the sales API fetched on every cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Summary,
    SalesByBranch,
    SalesByProductLine,
    SalesOverTime,
    CustomerDemographics,
}

impl Endpoint {
    /// All endpoints in the order a cycle issues them
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Summary,
        Endpoint::SalesByBranch,
        Endpoint::SalesByProductLine,
        Endpoint::SalesOverTime,
        Endpoint::CustomerDemographics,
    ];

    /// Path relative to the API base
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Summary => "/summary",
            Endpoint::SalesByBranch => "/sales-by-branch",
            Endpoint::SalesByProductLine => "/sales-by-product-line",
            Endpoint::SalesOverTime => "/sales-over-time",
            Endpoint::CustomerDemographics => "/customer-demographics",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One slice of a categorical breakdown (pie slice, bar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Name/value pairs in the order the API returned the keys
pub type CategoricalBreakdown = Vec<NamedValue>;

/// Daily point of the sales trend.
///
/// Wire names are kept (`Date`, `Total`); any additional fields of the record
/// are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Day in format "YYYY-MM-DD"
    #[serde(rename = "Date")]
    pub date: String,
    /// Sum of sales for the day, kept as sent (`4745` stays an integer)
    #[serde(rename = "Total")]
    pub total: serde_json::Number,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TimeSeriesPoint {
    /// `Total` as a float, for plotting
    pub fn total_value(&self) -> f64 {
        self.total.as_f64().unwrap_or(0.0)
    }
}

/// Gender and customer-type distributions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicBreakdown {
    pub gender: CategoricalBreakdown,
    pub customer_type: CategoricalBreakdown,
}

/// Headline numbers for the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_sales: f64,
    pub average_rating: f64,
    pub total_customers: u64,
    /// Wire name is `product_lines`
    #[serde(rename = "product_lines")]
    pub product_line_count: u64,
}

/// Everything one successful cycle produces; applied as a whole or not at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub summary: SummaryStats,
    pub sales_by_branch: CategoricalBreakdown,
    pub sales_by_product_line: CategoricalBreakdown,
    pub sales_over_time: Vec<TimeSeriesPoint>,
    pub demographics: DemographicBreakdown,
}
