use crate::domain::a001_catalog_product::api::FetchError;
use contracts::domain::a001_catalog_product::{FilterChange, FilterState, Product};
use leptos::prelude::*;

/// Identifies one fetch cycle. Only the ticket of the latest cycle may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Page status derived from the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// No cycle started yet
    Idle,
    Loading,
    Success,
    Failure(String),
}

#[derive(Clone, Debug)]
pub struct CatalogPageState {
    // Фильтры
    pub filters: FilterState,
    pub defaults: FilterState,

    // Результат последнего запроса
    pub products: Vec<Product>,
    pub error: Option<String>,

    // Флаг загрузки
    pub is_loading: bool,

    generation: u64,
}

impl CatalogPageState {
    pub fn new(defaults: FilterState) -> Self {
        Self {
            filters: defaults.clone(),
            defaults,
            products: Vec::new(),
            error: None,
            is_loading: false,
            generation: 0,
        }
    }

    /// Applies one filter edit. Returns `true` when a new fetch is due.
    pub fn apply_filter(&mut self, change: FilterChange) -> bool {
        self.filters.apply(change)
    }

    /// Restores the default filters. Returns `true` when a new fetch is due.
    pub fn reset_filters(&mut self) -> bool {
        let defaults = self.defaults.clone();
        self.filters.reset_to(&defaults)
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.active_count(&self.defaults)
    }

    /// Starts a fetch cycle: raises the loading flag, clears the error and
    /// supersedes every ticket handed out before.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Stores the outcome of the cycle identified by `ticket`.
    ///
    /// A superseded ticket is ignored and `false` is returned. Otherwise the
    /// loading flag is cleared; on success the product list is replaced, on
    /// failure the error is stored and the previous list stays.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<Product>, FetchError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(products) => self.products = products,
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn status(&self) -> FetchStatus {
        if self.is_loading {
            FetchStatus::Loading
        } else if let Some(error) = &self.error {
            FetchStatus::Failure(error.clone())
        } else if self.generation == 0 {
            FetchStatus::Idle
        } else {
            FetchStatus::Success
        }
    }

    /// A successful cycle returned no products.
    pub fn is_empty_result(&self) -> bool {
        self.status() == FetchStatus::Success && self.products.is_empty()
    }
}

pub fn create_state(defaults: FilterState) -> RwSignal<CatalogPageState> {
    RwSignal::new(CatalogPageState::new(defaults))
}
