pub mod view_model;

pub use view_model::{card_views, ProductCardView};

use crate::shared::components::ui::Badge;
use leptos::prelude::*;
use thaw::Card;

/// Read-only card of one catalog product
#[component]
pub fn ProductCard(card: ProductCardView) -> impl IntoView {
    let ProductCardView {
        image_src,
        name,
        company,
        category,
        price_label,
        rating_label,
        discount_badge,
        availability_label,
        availability_class,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <div class="product-grid__item">
            <Card>
                <img class="product-card__image" src=image_src alt=alt />
                <div class="product-card__body">
                    <h3 class="product-card__title">{name}</h3>
                    <p>
                        <span class="text-muted">"Company: "</span>
                        {company}
                    </p>
                    <p>
                        <span class="text-muted">"Category: "</span>
                        {category}
                    </p>
                    <p>
                        <span class="text-muted">"Price: "</span>
                        {price_label}
                    </p>
                    <div>
                        <span class="text-muted">"Rating: "</span>
                        {rating_label}
                    </div>
                    {discount_badge.map(|label| view! {
                        <Badge variant="error".to_string() pill=true>
                            {label}
                        </Badge>
                    })}
                    <p class=availability_class>
                        "Availability: "
                        {availability_label}
                    </p>
                </div>
            </Card>
        </div>
    }
}
