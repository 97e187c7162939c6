use leptos::ev::MouseEvent;
use leptos::prelude::*;
use pawshop_commerce::catalog::Product;
use pawshop_core::{CartHub, CoreError};

/// Catalog product with an "Add to Cart" button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let hub = expect_context::<CartHub>();
    let added = RwSignal::new(false);
    let price = product.price_display();
    let name = product.name.clone();
    let description = product.description.clone();
    let image_url = product.image_url.clone();

    let add_to_cart = move |_: MouseEvent| {
        let result = product
            .to_line_item(1)
            .map_err(CoreError::from)
            .and_then(|line| hub.add_item(line));
        match result {
            Ok(_) => added.set(true),
            Err(err) => tracing::warn!(id = %product.id, error = %err, "add to cart failed"),
        }
    };

    view! {
        <div class="product-card">
            <img src=image_url alt=name.clone()/>
            <div class="product-info">
                <h3>{name}</h3>
                <p class="description">{description}</p>
                <p class="price">{price}</p>
                <button class="btn" on:click=add_to_cart>"Add to Cart"</button>
                <Show when=move || added.get()>
                    <p class="added">"Added to cart!"</p>
                </Show>
            </div>
        </div>
    }
}
