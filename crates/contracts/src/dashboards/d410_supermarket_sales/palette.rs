//! Colours for categorical charts.
//!
//! Assignment is round-robin by position, so a breakdown keeps the same
//! colours across re-renders as long as its order is stable.

use super::dto::NamedValue;

pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D",
];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn assign_colors(breakdown: &[NamedValue]) -> Vec<&'static str> {
    (0..breakdown.len()).map(color_for).collect()
}
