use crate::shared::date_utils::{format_date_input, parse_date_input};
use chrono::NaiveDate;
use leptos::prelude::*;

/// DateInput component with native date picker
/// Clearing the field reports `None`
#[component]
pub fn DateInput(
    /// Label text
    label: &'static str,
    /// The current date
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Callback when the date changes
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input"
                prop:value=move || format_date_input(value.get())
                on:change=move |ev| {
                    on_change.run(parse_date_input(&event_target_value(&ev)));
                }
            />
        </div>
    }
}
