use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::FilterSelect;
use crate::shared::date_utils::format_range_label;
use chrono::NaiveDate;
use contracts::dashboards::d410_supermarket_sales::options::{
    BRANCH_OPTIONS, CUSTOMER_TYPE_OPTIONS, PRODUCT_LINE_OPTIONS,
};
use contracts::dashboards::d410_supermarket_sales::{DashboardState, Selection};
use leptos::prelude::*;

/// Branch, product line, customer type and date range filters.
///
/// Writes go straight into the shared state; the dashboard reacts to the
/// filter value, not to the write.
#[component]
pub fn FilterBar(state: RwSignal<DashboardState>) -> impl IntoView {
    let branch = Signal::derive(move || state.with(|s| s.filters().branch().clone()));
    let product_line = Signal::derive(move || state.with(|s| s.filters().product_line().clone()));
    let customer_type =
        Signal::derive(move || state.with(|s| s.filters().customer_type().clone()));
    let date_from = Signal::derive(move || state.with(|s| s.filters().date_from()));
    let date_to = Signal::derive(move || state.with(|s| s.filters().date_to()));
    let active_count = move || state.with(|s| s.filters().active_filter_count());

    let on_branch = Callback::new(move |value: Selection| {
        state.update(|s| {
            s.filters_mut().set_branch(value);
        })
    });
    let on_product_line = Callback::new(move |value: Selection| {
        state.update(|s| {
            s.filters_mut().set_product_line(value);
        })
    });
    let on_customer_type = Callback::new(move |value: Selection| {
        state.update(|s| {
            s.filters_mut().set_customer_type(value);
        })
    });
    let on_date_from = Callback::new(move |value: Option<NaiveDate>| {
        state.update(|s| {
            s.filters_mut().set_date_from(value);
        })
    });
    let on_date_to = Callback::new(move |value: Option<NaiveDate>| {
        state.update(|s| {
            s.filters_mut().set_date_to(value);
        })
    });
    let on_reset = move |_| {
        state.update(|s| {
            s.filters_mut().reset();
        })
    };

    view! {
        <div class="filter-bar">
            <FilterSelect
                label="Branch"
                value=branch
                on_change=on_branch
                options=BRANCH_OPTIONS
            />
            <FilterSelect
                label="Product Line"
                value=product_line
                on_change=on_product_line
                options=PRODUCT_LINE_OPTIONS
            />
            <FilterSelect
                label="Customer Type"
                value=customer_type
                on_change=on_customer_type
                options=CUSTOMER_TYPE_OPTIONS
            />
            <div class="filter-bar__dates">
                <DateInput label="From" value=date_from on_change=on_date_from />
                <DateInput label="To" value=date_to on_change=on_date_to />
                <span class="filter-bar__range-label">
                    {move || format_range_label(date_from.get(), date_to.get())}
                </span>
            </div>
            <div class="filter-bar__actions">
                {move || {
                    let count = active_count();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
                <button class="button button--secondary" on:click=on_reset>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
