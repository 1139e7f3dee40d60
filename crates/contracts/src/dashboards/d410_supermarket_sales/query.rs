use serde::{Deserialize, Serialize};

use super::error::DashboardError;
use super::filter::FilterState;

pub const BRANCH_KEY: &str = "branch";
pub const PRODUCT_LINE_KEY: &str = "product_line";
pub const CUSTOMER_TYPE_KEY: &str = "customer_type";
pub const DATE_FROM_KEY: &str = "date_from";
pub const DATE_TO_KEY: &str = "date_to";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters sent with every request of a cycle.
///
/// Keys are unique and kept in insertion order. The order only affects the
/// wire form; the API treats parameters as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` form, without the leading `?`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// `path` with the query string appended when there is one
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

/// Map the filter selection to query parameters.
///
/// Dimensions at their sentinel are omitted. Order of keys: branch,
/// product_line, customer_type, date_from, date_to. The two date bounds are
/// independent, so a lone `date_from` makes an open-ended range.
pub fn serialize(filters: &FilterState) -> QueryParameters {
    let mut params = QueryParameters::new();

    if let Some(branch) = filters.branch().as_filter() {
        params.insert(BRANCH_KEY, branch);
    }
    if let Some(product_line) = filters.product_line().as_filter() {
        params.insert(PRODUCT_LINE_KEY, product_line);
    }
    if let Some(customer_type) = filters.customer_type().as_filter() {
        params.insert(CUSTOMER_TYPE_KEY, customer_type);
    }
    if let Some(date_from) = filters.date_from() {
        params.insert(DATE_FROM_KEY, date_from.format(DATE_FORMAT).to_string());
    }
    if let Some(date_to) = filters.date_to() {
        params.insert(DATE_TO_KEY, date_to.format(DATE_FORMAT).to_string());
    }

    params
}

/// What to do with a date range whose end precedes its start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangePolicy {
    /// Send the range as is; the API answers with empty data
    Allow,
    /// Fail the cycle before any request is made
    #[default]
    Reject,
    /// Raise `date_to` to `date_from`, turning the range into a single day
    Clamp,
}

impl DateRangePolicy {
    /// Filter state to serialize for a cycle
    pub fn apply(&self, filters: &FilterState) -> Result<FilterState, DashboardError> {
        if !filters.has_inverted_range() {
            return Ok(filters.clone());
        }
        let (Some(from), Some(to)) = (filters.date_from(), filters.date_to()) else {
            return Ok(filters.clone());
        };

        match self {
            DateRangePolicy::Allow => Ok(filters.clone()),
            DateRangePolicy::Reject => Err(DashboardError::InvertedDateRange { from, to }),
            DateRangePolicy::Clamp => Ok(filters.clone().with_date_range(Some(from), Some(from))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_supermarket_sales::filter::Selection;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn only(value: &str) -> Selection {
        Selection::Only(value.to_string())
    }

    #[test]
    fn test_all_sentinels_give_empty_query() {
        let params = serialize(&FilterState::default());
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
        assert_eq!(params.append_to("/summary"), "/summary");
    }

    #[test]
    fn test_product_line_only() {
        let filters = FilterState::new().with_product_line(only("Food and beverages"));
        let params = serialize(&filters);
        assert_eq!(params.to_query_string(), "product_line=Food+and+beverages");
    }

    #[test]
    fn test_date_range_only() {
        let filters =
            FilterState::new().with_date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert_eq!(
            serialize(&filters).to_query_string(),
            "date_from=2024-01-01&date_to=2024-01-31"
        );
    }

    #[test]
    fn test_open_ended_range() {
        let filters = FilterState::new().with_date_range(Some(date(2024, 3, 5)), None);
        let params = serialize(&filters);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get(DATE_FROM_KEY), Some("2024-03-05"));
        assert_eq!(params.get(DATE_TO_KEY), None);
    }

    #[test]
    fn test_key_order_is_fixed() {
        let filters = FilterState::new()
            .with_date_range(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)))
            .with_customer_type(only("Member"))
            .with_branch(only("A"))
            .with_product_line(only("Health and beauty"));
        let keys: Vec<&str> = serialize(&filters).iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                BRANCH_KEY,
                PRODUCT_LINE_KEY,
                CUSTOMER_TYPE_KEY,
                DATE_FROM_KEY,
                DATE_TO_KEY
            ]
        );
        assert_eq!(
            serialize(&filters).append_to("/summary"),
            "/summary?branch=A&product_line=Health+and+beauty&customer_type=Member&date_from=2024-01-01&date_to=2024-02-01"
        );
    }

    #[test]
    fn test_values_are_form_encoded() {
        let filters = FilterState::new().with_branch(only("A&B=C"));
        assert_eq!(serialize(&filters).to_query_string(), "branch=A%26B%3DC");
    }

    #[test]
    fn test_distinct_selections_give_distinct_queries() {
        let branches = [Selection::All, only("A"), only("B")];
        let lines = [Selection::All, only("Food and beverages")];
        let types = [Selection::All, only("Member"), only("Normal")];
        let dates = [None, Some(date(2024, 1, 1))];

        let mut seen = HashSet::new();
        let mut total = 0;
        for branch in &branches {
            for line in &lines {
                for customer_type in &types {
                    for from in &dates {
                        for to in &dates {
                            let filters = FilterState::new()
                                .with_branch(branch.clone())
                                .with_product_line(line.clone())
                                .with_customer_type(customer_type.clone())
                                .with_date_range(*from, *to);
                            seen.insert(serialize(&filters).to_query_string());
                            total += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params = QueryParameters::new();
        params.insert(BRANCH_KEY, "A");
        params.insert(DATE_TO_KEY, "2024-01-01");
        params.insert(BRANCH_KEY, "B");
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "branch=B&date_to=2024-01-01");
    }

    #[test]
    fn test_date_range_policy() {
        let inverted =
            FilterState::new().with_date_range(Some(date(2024, 1, 31)), Some(date(2024, 1, 1)));

        assert_eq!(DateRangePolicy::Allow.apply(&inverted), Ok(inverted.clone()));
        assert_eq!(
            DateRangePolicy::Reject.apply(&inverted),
            Err(DashboardError::InvertedDateRange {
                from: date(2024, 1, 31),
                to: date(2024, 1, 1),
            })
        );

        let clamped = DateRangePolicy::Clamp.apply(&inverted).unwrap();
        assert_eq!(clamped.date_from(), Some(date(2024, 1, 31)));
        assert_eq!(clamped.date_to(), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_policy_leaves_ordered_ranges_alone() {
        let ordered =
            FilterState::new().with_date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)));
        for policy in [
            DateRangePolicy::Allow,
            DateRangePolicy::Reject,
            DateRangePolicy::Clamp,
        ] {
            assert_eq!(policy.apply(&ordered), Ok(ordered.clone()));
        }
    }
}
