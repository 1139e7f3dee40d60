use crate::dashboards::SupermarketSalesDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SupermarketSalesDashboard />
    }
}
