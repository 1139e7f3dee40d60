use leptos::prelude::*;

/// How a card renders its number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// "$322,966.75"
    Money,
    /// Fixed number of decimals, no grouping
    Decimal { decimals: usize },
    /// "1,000"
    Integer,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => {
            let cents = (val.abs() * 100.0).round() as u64;
            let sign = if val < 0.0 && cents > 0 { "-" } else { "" };
            format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
        }
        ValueFormat::Decimal { decimals } => format!("{:.prec$}", val, prec = decimals),
        ValueFormat::Integer => {
            let rounded = val.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{}{}", sign, format_thousands(rounded.abs() as u64))
        }
    }
}

fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Summary card: a big number with a caption below
#[component]
pub fn StatCard(
    /// Caption displayed under the value
    label: &'static str,
    /// Value to show (None = no data yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_value(322966.749, ValueFormat::Money), "$322,966.75");
        assert_eq!(format_value(0.0, ValueFormat::Money), "$0.00");
        assert_eq!(format_value(999.999, ValueFormat::Money), "$1,000.00");
        assert_eq!(format_value(-1234.5, ValueFormat::Money), "-$1,234.50");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_value(6.9727, ValueFormat::Decimal { decimals: 2 }), "6.97");
        assert_eq!(format_value(7.0, ValueFormat::Decimal { decimals: 2 }), "7.00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(1000.0, ValueFormat::Integer), "1,000");
        assert_eq!(format_value(6.0, ValueFormat::Integer), "6");
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1,234,567");
    }
}
