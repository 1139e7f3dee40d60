use contracts::dashboards::d410_supermarket_sales::TimeSeriesPoint;
use leptos::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;

/// SVG `points` attribute for the daily totals, first day on the left
fn polyline_points(points: &[TimeSeriesPoint], width: f64, height: f64) -> String {
    let max = points.iter().map(|p| p.total_value()).fold(0.0_f64, f64::max);
    let step = if points.len() > 1 {
        width / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if points.len() > 1 { i as f64 * step } else { width / 2.0 };
            let y = if max > 0.0 {
                height - (point.total_value().max(0.0) / max) * height
            } else {
                height
            };
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Daily sales line
#[component]
pub fn TrendChart(
    title: &'static str,
    #[prop(into)] points: Signal<Vec<TimeSeriesPoint>>,
) -> impl IntoView {
    let polyline = move || points.with(|p| polyline_points(p, WIDTH, HEIGHT));
    let range = move || {
        points.with(|p| match (p.first(), p.last()) {
            (Some(first), Some(last)) => format!("{} \u{2192} {}", first.date, last.date),
            _ => String::new(),
        })
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <span class="card__subtitle">{range}</span>
            </div>
            <div class="card__content">
                <svg
                    class="trend-chart"
                    viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                    preserveAspectRatio="none"
                >
                    <polyline
                        fill="none"
                        stroke="#8884d8"
                        stroke-width="2"
                        points=polyline
                    />
                </svg>
            </div>
        </div>
    }
}
