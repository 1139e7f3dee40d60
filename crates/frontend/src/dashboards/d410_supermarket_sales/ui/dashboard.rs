use super::{BreakdownPanel, FilterBar, TrendChart};
use crate::dashboards::d410_supermarket_sales::api::HttpSalesSource;
use crate::shared::api_utils::api_base;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use contracts::dashboards::d410_supermarket_sales::{DashboardConfig, DashboardState};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn dashboard_config() -> DashboardConfig {
    let base = api_base();
    if base.is_empty() {
        DashboardConfig::default()
    } else {
        DashboardConfig::default().with_api_base(base)
    }
}

/// Supermarket sales dashboard component
#[component]
pub fn SupermarketSalesDashboard() -> impl IntoView {
    let config = dashboard_config();
    let source = HttpSalesSource::new(config.clone());
    let state = RwSignal::new(DashboardState::new(config.date_range_policy));

    // Notifies only when the filter value changes, not on every state write
    let filters = Memo::new(move |_| state.with(|s| s.filters().clone()));

    // One fetch cycle per filter change
    Effect::new(move |_| {
        filters.track();

        let Some(Ok(cycle)) = state.try_update(|s| s.begin_cycle()) else {
            return;
        };
        log::debug!(
            "Starting dashboard cycle {} ({})",
            cycle.generation(),
            cycle.query().to_query_string()
        );
        let source = source.clone();
        spawn_local(async move {
            let result = cycle.run(&source).await;
            state.try_update(|s| s.complete_cycle(result));
        });
    });

    // Leaving the page aborts the cycle in flight
    on_cleanup(move || {
        state.try_update(|s| s.cancel());
    });

    let snapshot = Memo::new(move |_| state.with(|s| s.snapshot().cloned()));
    let has_data = Memo::new(move |_| snapshot.with(|s| s.is_some()));
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(|e| e.to_string())));

    let total_sales =
        Signal::derive(move || snapshot.with(|s| s.as_ref().map(|s| s.summary.total_sales)));
    let average_rating =
        Signal::derive(move || snapshot.with(|s| s.as_ref().map(|s| s.summary.average_rating)));
    let total_customers = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map(|s| s.summary.total_customers as f64))
    });
    let product_lines = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map(|s| s.summary.product_line_count as f64))
    });

    let sales_by_branch = Signal::derive(move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.sales_by_branch.clone())
                .unwrap_or_default()
        })
    });
    let sales_by_product_line = Signal::derive(move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.sales_by_product_line.clone())
                .unwrap_or_default()
        })
    });
    let sales_over_time = Signal::derive(move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.sales_over_time.clone())
                .unwrap_or_default()
        })
    });
    let gender = Signal::derive(move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.demographics.gender.clone())
                .unwrap_or_default()
        })
    });
    let customer_type = Signal::derive(move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.demographics.customer_type.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="sales-dashboard">
            <div class="page__header">
                <h1 class="page__title">"Supermarket Sales Dashboard"</h1>
                <p class="page__subtitle">"Comprehensive sales analysis and insights"</p>
            </div>

            <FilterBar state=state />

            {move || error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            {move || (loading.get() && has_data.get()).then(|| view! {
                <div class="sales-dashboard__overlay">
                    <div class="sales-dashboard__overlay-box">"Updating data..."</div>
                </div>
            })}

            <Show
                when=move || has_data.get()
                fallback=move || view! {
                    <div class="sales-dashboard__splash">
                        {move || if loading.get() { "Loading dashboard..." } else { "No data loaded" }}
                    </div>
                }
            >
                <div class="sales-dashboard__cards">
                    <StatCard label="Total Sales" value=total_sales format=ValueFormat::Money />
                    <StatCard
                        label="Average Rating"
                        value=average_rating
                        format=ValueFormat::Decimal { decimals: 2 }
                    />
                    <StatCard label="Total Customers" value=total_customers format=ValueFormat::Integer />
                    <StatCard label="Product Lines" value=product_lines format=ValueFormat::Integer />
                </div>

                <div class="sales-dashboard__row">
                    <BreakdownPanel title="Sales by Branch" data=sales_by_branch format=ValueFormat::Money />
                    <BreakdownPanel
                        title="Sales by Product Line"
                        data=sales_by_product_line
                        format=ValueFormat::Money
                    />
                </div>

                <TrendChart title="Sales Trend" points=sales_over_time />

                <div class="sales-dashboard__row">
                    <BreakdownPanel title="Gender Distribution" data=gender format=ValueFormat::Integer />
                    <BreakdownPanel
                        title="Customer Type Distribution"
                        data=customer_type
                        format=ValueFormat::Integer
                    />
                </div>
            </Show>
        </div>
    }
}
