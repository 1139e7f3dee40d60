use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Option value the select widgets use for "no filter on this dimension"
pub const ALL: &str = "all";

/// Selection of a single categorical filter dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Sentinel: the dimension is not filtered
    #[default]
    All,
    /// Only records with exactly this value
    Only(String),
}

impl Selection {
    /// Parse the raw value of a select widget
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Value to put back into a select widget
    pub fn option_value(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value.as_str(),
        }
    }

    /// The filter value, `None` at the sentinel
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// Current filter selection of the dashboard.
///
/// The four dimensions are independent: every setter replaces exactly one
/// field and reports whether the stored value actually changed. No
/// cross-field validation happens here; inverted date ranges are handled by
/// [`DateRangePolicy`](super::query::DateRangePolicy) when a cycle starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    branch: Selection,
    product_line: Selection,
    customer_type: Selection,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(&self) -> &Selection {
        &self.branch
    }

    pub fn product_line(&self) -> &Selection {
        &self.product_line
    }

    pub fn customer_type(&self) -> &Selection {
        &self.customer_type
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn set_branch(&mut self, branch: Selection) -> bool {
        replace(&mut self.branch, branch)
    }

    pub fn set_product_line(&mut self, product_line: Selection) -> bool {
        replace(&mut self.product_line, product_line)
    }

    pub fn set_customer_type(&mut self, customer_type: Selection) -> bool {
        replace(&mut self.customer_type, customer_type)
    }

    pub fn set_date_from(&mut self, date_from: Option<NaiveDate>) -> bool {
        replace(&mut self.date_from, date_from)
    }

    pub fn set_date_to(&mut self, date_to: Option<NaiveDate>) -> bool {
        replace(&mut self.date_to, date_to)
    }

    /// Replace both bounds at once, as a range calendar does
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        let from_changed = self.set_date_from(from);
        let to_changed = self.set_date_to(to);
        from_changed || to_changed
    }

    /// Builder-style variants, used when a state is assembled in one go
    pub fn with_branch(mut self, branch: Selection) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_product_line(mut self, product_line: Selection) -> Self {
        self.product_line = product_line;
        self
    }

    pub fn with_customer_type(mut self, customer_type: Selection) -> Self {
        self.customer_type = customer_type;
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Number of dimensions away from their sentinel (each date bound counts once)
    pub fn active_filter_count(&self) -> usize {
        [
            !self.branch.is_all(),
            !self.product_line.is_all(),
            !self.customer_type.is_all(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// True when both bounds are set and `date_to` precedes `date_from`
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if to < from)
    }

    /// Back to "all" / unset on every dimension
    pub fn reset(&mut self) -> bool {
        replace(self, FilterState::default())
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
