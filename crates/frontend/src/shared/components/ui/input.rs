use leptos::prelude::*;

/// Number input with label
///
/// Shows the raw text as typed; parsing is left to the `on_input` handler.
#[component]
pub fn NumberInput(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element, also used by the label
    id: &'static str,
    /// Input text
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the raw text
    on_input: Callback<String>,
    /// Step attribute ("any" for prices, "1" for counts)
    #[prop(optional, into)]
    step: MaybeProp<String>,
) -> impl IntoView {
    let input_step = move || step.get().unwrap_or_else(|| "any".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type="number"
                step=input_step
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
