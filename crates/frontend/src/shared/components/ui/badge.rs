use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Rounded pill shape (used for discount labels)
    #[prop(optional)]
    pill: bool,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let shape_class = if pill { "badge--pill" } else { "" };

    view! {
        <span class=move || format!("badge {} {}", variant_class(), shape_class)>
            {children()}
        </span>
    }
}
