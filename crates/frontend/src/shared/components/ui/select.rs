use contracts::domain::a001_catalog_product::filter::option_label;
use leptos::prelude::*;

/// Select over a fixed list of option values
///
/// Each value is shown through `option_label`, so the empty value reads "All".
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the select element, also used by the label
    id: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Allowed values in display order
    options: &'static [&'static str],
    /// Change event handler
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .copied()
                    .map(|val| {
                        let is_selected = move || value.get() == val;
                        view! {
                            <option value=val selected=is_selected>
                                {option_label(val)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
