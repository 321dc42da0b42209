use crate::shared::numeric_input::{
    format_number, parse_decimal_prefix, parse_integer_prefix, same_value,
};
use serde::{Deserialize, Serialize};

/// Companies offered by the filter panel, in display order. `""` = all.
pub const COMPANIES: &[&str] = &["", "AMZ", "P", "SP", "HYN", "AZO"];

/// Categories offered by the filter panel, in display order. `""` = all.
pub const CATEGORIES: &[&str] = &[
    "",
    "Phone",
    "Computer",
    "TV",
    "Earphone",
    "Tablet",
    "Charger",
    "House",
    "Keypad",
    "Bluetooth",
    "Pendrive",
    "Remote",
    "Speaker",
    "Headset",
    "Laptop",
    "PC",
];

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 10000.0;
pub const DEFAULT_COUNT: f64 = 10.0;

/// Label shown for an option value; the empty value reads "All".
pub fn option_label(value: &str) -> &str {
    if value.is_empty() {
        "All"
    } else {
        value
    }
}

/// Current product query.
///
/// No invariant is enforced between fields: `min_price > max_price`,
/// a negative count or `NaN` prices are sent to the service unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    pub company: String,
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    /// Integer value of the count field, `NaN` when it holds no digits
    pub count: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            company: String::new(),
            category: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            count: DEFAULT_COUNT,
        }
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        self.company == other.company
            && self.category == other.category
            && same_value(self.min_price, other.min_price)
            && same_value(self.max_price, other.max_price)
            && same_value(self.count, other.count)
    }
}

/// A single edit coming from one filter control.
///
/// Numeric variants carry the raw text of the input; parsing happens in
/// [`FilterState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Company(String),
    Category(String),
    MinPrice(String),
    MaxPrice(String),
    Count(String),
}

impl FilterState {
    /// Applies one edit. Returns `true` if the stored value changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        match change {
            FilterChange::Company(value) => replace_if_changed(&mut self.company, value),
            FilterChange::Category(value) => replace_if_changed(&mut self.category, value),
            FilterChange::MinPrice(raw) => {
                replace_number_if_changed(&mut self.min_price, parse_decimal_prefix(&raw))
            }
            FilterChange::MaxPrice(raw) => {
                replace_number_if_changed(&mut self.max_price, parse_decimal_prefix(&raw))
            }
            FilterChange::Count(raw) => {
                replace_number_if_changed(&mut self.count, parse_integer_prefix(&raw))
            }
        }
    }

    /// Restores `defaults`. Returns `true` if anything changed.
    pub fn reset_to(&mut self, defaults: &FilterState) -> bool {
        if self == defaults {
            return false;
        }
        *self = defaults.clone();
        true
    }

    /// Number of fields that differ from `defaults`.
    pub fn active_count(&self, defaults: &FilterState) -> usize {
        [
            self.company != defaults.company,
            self.category != defaults.category,
            !same_value(self.min_price, defaults.min_price),
            !same_value(self.max_price, defaults.max_price),
            !same_value(self.count, defaults.count),
        ]
        .into_iter()
        .filter(|differs| *differs)
        .count()
    }

    /// Count as it appears in the path segment `top-{count}`.
    pub fn count_text(&self) -> String {
        format_number(self.count)
    }

    /// Request path and query for this filter.
    ///
    /// Company and category are substituted raw, without percent-encoding,
    /// and an empty value leaves an empty path segment.
    pub fn products_path(&self) -> String {
        format!(
            "/test/companies/{}/categories/{}/products/top-{}?minPrice={}&maxPrice={}",
            self.company,
            self.category,
            self.count_text(),
            format_number(self.min_price),
            format_number(self.max_price),
        )
    }

    /// Full request URL against the catalog host `base_url`.
    pub fn products_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.products_path())
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn replace_number_if_changed(slot: &mut f64, value: f64) -> bool {
    if same_value(*slot, value) {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptops() -> FilterState {
        FilterState {
            company: "AMZ".to_string(),
            category: "Laptop".to_string(),
            min_price: 500.0,
            max_price: 2000.0,
            count: 5.0,
        }
    }

    #[test]
    fn test_products_path_for_laptops() {
        assert_eq!(
            laptops().products_path(),
            "/test/companies/AMZ/categories/Laptop/products/top-5?minPrice=500&maxPrice=2000"
        );
    }

    #[test]
    fn test_products_path_places_every_value() {
        for company in COMPANIES {
            for category in CATEGORIES {
                let filter = FilterState {
                    company: company.to_string(),
                    category: category.to_string(),
                    min_price: 12.5,
                    max_price: 99.0,
                    count: 3.0,
                };
                let expected = format!(
                    "/test/companies/{}/categories/{}/products/top-3?minPrice=12.5&maxPrice=99",
                    company, category
                );
                assert_eq!(filter.products_path(), expected);
            }
        }
    }

    #[test]
    fn test_products_path_with_defaults_keeps_empty_segments() {
        assert_eq!(
            FilterState::default().products_path(),
            "/test/companies//categories//products/top-10?minPrice=0&maxPrice=10000"
        );
    }

    #[test]
    fn test_products_path_with_unparseable_numbers() {
        let mut filter = FilterState::default();
        filter.apply(FilterChange::MinPrice("abc".into()));
        filter.apply(FilterChange::Count("".into()));
        assert_eq!(
            filter.products_path(),
            "/test/companies//categories//products/top-NaN?minPrice=NaN&maxPrice=10000"
        );
    }

    #[test]
    fn test_products_url_joins_base() {
        let expected = "http://catalog.local/test/companies/AMZ/categories/Laptop/products/top-5?minPrice=500&maxPrice=2000";
        assert_eq!(laptops().products_url("http://catalog.local"), expected);
        assert_eq!(laptops().products_url("http://catalog.local/"), expected);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut filter = FilterState::default();

        assert!(filter.apply(FilterChange::Company("AMZ".into())));
        assert!(!filter.apply(FilterChange::Company("AMZ".into())));

        assert!(filter.apply(FilterChange::MinPrice("500".into())));
        assert!(!filter.apply(FilterChange::MinPrice("500.0".into())));
        assert_eq!(filter.min_price, 500.0);

        assert!(filter.apply(FilterChange::Count("7".into())));
        assert!(!filter.apply(FilterChange::Count("7.9".into())));
        assert_eq!(filter.count, 7.0);
    }

    #[test]
    fn test_apply_nan_twice_is_one_change() {
        let mut filter = FilterState::default();
        assert!(filter.apply(FilterChange::MaxPrice("".into())));
        assert!(filter.max_price.is_nan());
        assert!(!filter.apply(FilterChange::MaxPrice("x".into())));
    }

    #[test]
    fn test_products_path_with_oversized_count() {
        let mut filter = FilterState::default();
        filter.apply(FilterChange::Count("99999999999999999999".into()));
        assert_eq!(
            filter.products_path(),
            "/test/companies//categories//products/top-100000000000000000000?minPrice=0&maxPrice=10000"
        );
    }

    #[test]
    fn test_apply_does_not_validate_ranges() {
        let mut filter = FilterState::default();
        filter.apply(FilterChange::MinPrice("900".into()));
        filter.apply(FilterChange::MaxPrice("100".into()));
        filter.apply(FilterChange::Count("-2".into()));
        assert_eq!(filter.min_price, 900.0);
        assert_eq!(filter.max_price, 100.0);
        assert_eq!(filter.count, -2.0);
    }

    #[test]
    fn test_reset_and_active_count() {
        let defaults = FilterState::default();
        let mut filter = laptops();
        assert_eq!(filter.active_count(&defaults), 5);

        assert!(filter.reset_to(&defaults));
        assert_eq!(filter, defaults);
        assert_eq!(filter.active_count(&defaults), 0);
        assert!(!filter.reset_to(&defaults));
    }

    #[test]
    fn test_option_tables() {
        assert_eq!(COMPANIES.len(), 6);
        assert_eq!(CATEGORIES.len(), 16);
        assert_eq!(option_label(""), "All");
        assert_eq!(option_label("HYN"), "HYN");
        assert_eq!(CATEGORIES.last(), Some(&"PC"));
    }
}
