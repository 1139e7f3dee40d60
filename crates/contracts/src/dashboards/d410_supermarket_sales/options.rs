//! Values offered by the filter selects. The first entry of every list is the
//! "all" sentinel.

use super::filter::ALL;

pub const BRANCH_OPTIONS: &[(&str, &str)] = &[
    (ALL, "All Branches"),
    ("A", "Branch A"),
    ("B", "Branch B"),
    ("C", "Branch C"),
];

pub const PRODUCT_LINE_OPTIONS: &[(&str, &str)] = &[
    (ALL, "All Products"),
    ("Electronic accessories", "Electronic Accessories"),
    ("Fashion accessories", "Fashion Accessories"),
    ("Food and beverages", "Food and Beverages"),
    ("Health and beauty", "Health and Beauty"),
    ("Home and lifestyle", "Home and Lifestyle"),
    ("Sports and travel", "Sports and Travel"),
];

pub const CUSTOMER_TYPE_OPTIONS: &[(&str, &str)] = &[
    (ALL, "All Customers"),
    ("Member", "Members"),
    ("Normal", "Normal"),
];
