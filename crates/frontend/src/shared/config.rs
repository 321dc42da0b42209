use contracts::domain::a001_catalog_product::filter::{
    DEFAULT_COUNT, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
use contracts::domain::a001_catalog_product::FilterState;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub filters: FilterDefaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog host, without the `/test/...` path
    pub base_url: String,
    /// Image shown on cards of out-of-stock products
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://20.244.56.144".to_string(),
            placeholder_image: "placeholder.jpg".to_string(),
        }
    }
}

/// Initial filter values, also used by "Reset"
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FilterDefaults {
    pub company: String,
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    pub count: i64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            company: String::new(),
            category: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            count: DEFAULT_COUNT as i64,
        }
    }
}

impl FilterDefaults {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            company: self.company.clone(),
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            count: self.count as f64,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[catalog]
base_url = "http://20.244.56.144"
placeholder_image = "placeholder.jpg"

[filters]
company = ""
category = ""
min_price = 0.0
max_price = 10000.0
count = 10
"#;

/// Parse a configuration document. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load the embedded configuration.
///
/// `CATALOG_BASE_URL`, when set at build time, replaces `catalog.base_url`.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(base_url) = option_env!("CATALOG_BASE_URL") {
        log::info!("Catalog base URL overridden at build time: {}", base_url);
        config.catalog.base_url = base_url.to_string();
    }
    Ok(config)
}
