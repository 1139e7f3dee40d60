use contracts::dashboards::d410_supermarket_sales::Selection;
use leptos::prelude::*;

/// Select bound to one filter dimension.
///
/// The first option is expected to be the "all" sentinel; picking it yields
/// `Selection::All`.
#[component]
pub fn FilterSelect(
    /// Label text
    label: &'static str,
    /// Current selection
    #[prop(into)]
    value: Signal<Selection>,
    /// Change event handler
    on_change: Callback<Selection>,
    /// Options: (value, label) pairs
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| {
                    on_change.run(Selection::from_option_value(&event_target_value(&ev)));
                }
            >
                {options
                    .iter()
                    .map(|(val, text)| {
                        let val = *val;
                        let is_selected = move || value.with(|v| v.option_value() == val);
                        view! {
                            <option value=val selected=is_selected>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
