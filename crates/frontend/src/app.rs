use crate::domain::a001_catalog_product::ui::list::CatalogProductList;
use crate::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid catalog configuration, using defaults: {}", e);
        Config::default()
    });
    log::info!("Catalog endpoint: {}", config.catalog.base_url);

    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <CatalogProductList />
    }
}
