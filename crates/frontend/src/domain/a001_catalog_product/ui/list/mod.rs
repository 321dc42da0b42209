pub mod state;

use self::state::create_state;
use crate::domain::a001_catalog_product::api::fetch_products;
use crate::domain::a001_catalog_product::ui::card::{card_views, ProductCard};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::ui::{NumberInput, Select};
use crate::shared::config::Config;
use contracts::domain::a001_catalog_product::{FilterChange, FilterState, CATEGORIES, COMPANIES};
use contracts::shared::numeric_input::format_number;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Raw text of the numeric fields as currently typed
#[derive(Clone, Copy)]
struct NumericFieldsText {
    min_price: RwSignal<String>,
    max_price: RwSignal<String>,
    count: RwSignal<String>,
}

impl NumericFieldsText {
    fn new(filters: &FilterState) -> Self {
        Self {
            min_price: RwSignal::new(format_number(filters.min_price)),
            max_price: RwSignal::new(format_number(filters.max_price)),
            count: RwSignal::new(filters.count_text()),
        }
    }

    fn reset(&self, filters: &FilterState) {
        self.min_price.set(format_number(filters.min_price));
        self.max_price.set(format_number(filters.max_price));
        self.count.set(filters.count_text());
    }
}

#[component]
pub fn CatalogProductList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let base_url = StoredValue::new(config.catalog.base_url.clone());
    let placeholder_image = StoredValue::new(config.catalog.placeholder_image.clone());

    let defaults = config.filters.to_filter_state();
    let fields_text = NumericFieldsText::new(&defaults);
    let state = create_state(defaults);
    let is_filter_expanded = RwSignal::new(true);

    let load_products = move || {
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let url = state.with_untracked(|s| s.filters.products_url(&base_url.get_value()));
        log::debug!("Loading products: {}", url);

        spawn_local(async move {
            let result = fetch_products(&url).await;
            if let Err(e) = &result {
                log::warn!("Catalog request failed ({}): {:?}", url, e);
            }
            let applied = state.try_update(|s| s.settle(ticket, result)).unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale response for {}", url);
            }
        });
    };

    let apply_filter = move |change: FilterChange| {
        let changed = state.try_update(|s| s.apply_filter(change)).unwrap_or(false);
        if changed {
            load_products();
        }
    };

    let reset_filters = move |_: ()| {
        let changed = state.try_update(|s| s.reset_filters()).unwrap_or(false);
        fields_text.reset(&state.with_untracked(|s| s.filters.clone()));
        if changed {
            load_products();
        }
    };

    let on_company_change = Callback::new(move |v: String| apply_filter(FilterChange::Company(v)));
    let on_category_change =
        Callback::new(move |v: String| apply_filter(FilterChange::Category(v)));
    let on_min_price_input = Callback::new(move |v: String| {
        fields_text.min_price.set(v.clone());
        apply_filter(FilterChange::MinPrice(v));
    });
    let on_max_price_input = Callback::new(move |v: String| {
        fields_text.max_price.set(v.clone());
        apply_filter(FilterChange::MaxPrice(v));
    });
    let on_count_input = Callback::new(move |v: String| {
        fields_text.count.set(v.clone());
        apply_filter(FilterChange::Count(v));
    });

    let company = Signal::derive(move || state.with(|s| s.filters.company.clone()));
    let category = Signal::derive(move || state.with(|s| s.filters.category.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let is_empty_result = Signal::derive(move || state.with(|s| s.is_empty_result()));
    let cards = Signal::derive(move || {
        state.with(|s| card_views(&s.products, &placeholder_image.get_value()))
    });

    // Первая загрузка при монтировании
    load_products();

    view! {
        <div class="page" id="a001_catalog_product--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Top Products"</h1>
                </div>
            </div>

            <div class="page__content">
                <p>"Select filters to view products:"</p>

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    on_reset=Callback::new(reset_filters)
                >
                    <div class="filter-panel__row">
                        <div class="filter-panel__column">
                            <Select
                                label="Company:"
                                id="company"
                                value=company
                                options=COMPANIES
                                on_change=on_company_change
                            />
                            <Select
                                label="Category:"
                                id="category"
                                value=category
                                options=CATEGORIES
                                on_change=on_category_change
                            />
                        </div>
                        <div class="filter-panel__column">
                            <NumberInput
                                label="Min Price:"
                                id="minPrice"
                                value=fields_text.min_price
                                on_input=on_min_price_input
                            />
                            <NumberInput
                                label="Max Price:"
                                id="maxPrice"
                                value=fields_text.max_price
                                on_input=on_max_price_input
                            />
                        </div>
                        <div class="filter-panel__column">
                            <NumberInput
                                label="Number of Products:"
                                id="numProducts"
                                value=fields_text.count
                                on_input=on_count_input
                                step="1".to_string()
                            />
                        </div>
                    </div>
                </FilterPanel>

                <Show when=move || is_loading.get()>
                    <div class="page__status">
                        <Spinner />
                        <p>"Loading..."</p>
                    </div>
                </Show>

                {move || error.get().map(|e| view! {
                    <p class="text-danger">"Error: " {e}</p>
                })}

                <Show when=move || is_empty_result.get()>
                    <p class="text-muted">"No products match the selected filters."</p>
                </Show>

                <div class="product-grid">
                    <For
                        each=move || cards.get()
                        key=|card| card.clone()
                        children=move |card| view! { <ProductCard card=card /> }
                    />
                </div>
            </div>
        </div>
    }
}
