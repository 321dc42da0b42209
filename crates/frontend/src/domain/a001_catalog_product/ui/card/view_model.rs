use crate::shared::format::format_price;
use contracts::domain::a001_catalog_product::{Product, ProductId};
use contracts::shared::numeric_input::format_number;

/// Display data of one product card
///
/// The whole view is the list key: a product whose id stays on screen but
/// whose data changed gets a fresh card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductCardView {
    pub key: ProductId,
    pub image_src: String,
    pub name: String,
    pub company: String,
    pub category: String,
    pub price_label: String,
    pub rating_label: String,
    /// `Some("-15%")` when the product is discounted
    pub discount_badge: Option<String>,
    pub availability_label: &'static str,
    /// `"text-danger"` for out-of-stock products
    pub availability_class: &'static str,
}

impl ProductCardView {
    pub fn new(product: &Product, placeholder_image: &str) -> Self {
        let image_src = if product.availability {
            product.image_url.clone().unwrap_or_default()
        } else {
            placeholder_image.to_string()
        };

        let discount_badge = product
            .has_discount()
            .then(|| format!("-{}%", format_number(product.discount)));

        let (availability_label, availability_class) = if product.availability {
            ("In Stock", "")
        } else {
            ("Out of Stock", "text-danger")
        };

        Self {
            key: product.id.clone(),
            image_src,
            name: product.name.clone(),
            company: product.company.clone(),
            category: product.category.clone(),
            price_label: format_price(product.price),
            rating_label: format_number(product.rating),
            discount_badge,
            availability_label,
            availability_class,
        }
    }
}

/// One card per product, in list order.
pub fn card_views(products: &[Product], placeholder_image: &str) -> Vec<ProductCardView> {
    products
        .iter()
        .map(|p| ProductCardView::new(p, placeholder_image))
        .collect()
}
