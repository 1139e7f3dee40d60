use crate::shared::components::stat_card::{format_value, ValueFormat};
use contracts::dashboards::d410_supermarket_sales::palette::color_for;
use contracts::dashboards::d410_supermarket_sales::CategoricalBreakdown;
use leptos::prelude::*;

/// Width of a bar in percent of the largest value
fn share_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Categorical breakdown as coloured horizontal bars.
///
/// Row colours come from the palette by position, so the order of `data`
/// decides the colour of every entry.
#[component]
pub fn BreakdownPanel(
    title: &'static str,
    #[prop(into)] data: Signal<CategoricalBreakdown>,
    format: ValueFormat,
) -> impl IntoView {
    let rows = move || {
        let data = data.get();
        let max = data.iter().map(|nv| nv.value).fold(0.0_f64, f64::max);

        data.into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let color = color_for(index);
                let width = share_percent(entry.value, max);
                view! {
                    <div class="breakdown__row">
                        <span
                            class="breakdown__swatch"
                            style=format!("background: {};", color)
                        ></span>
                        <span class="breakdown__name">{entry.name}</span>
                        <div class="breakdown__track">
                            <div
                                class="breakdown__bar"
                                style=format!("width: {:.1}%; background: {};", width, color)
                            ></div>
                        </div>
                        <span class="breakdown__value">{format_value(entry.value, format)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
            </div>
            <div class="card__content breakdown">
                {move || {
                    if data.with(|d| d.is_empty()) {
                        view! { <div class="breakdown__empty">"No data"</div> }.into_any()
                    } else {
                        rows().into_any()
                    }
                }}
            </div>
        </div>
    }
}
