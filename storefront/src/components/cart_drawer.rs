use leptos::ev::MouseEvent;
use leptos::prelude::*;
use pawshop_commerce::cart::{Cart, CartLineItem};
use pawshop_commerce::ProductId;
use pawshop_core::CartHub;

use crate::state::total_label;

/// Slide-in cart panel.
///
/// Row controls go straight to the hub; the rows themselves re-render when
/// the hub's change signal refreshes `cart`.
#[component]
pub fn CartDrawer(
    cart: ReadSignal<Cart>,
    on_close: Callback<()>,
    on_checkout: Callback<()>,
) -> impl IntoView {
    let hub = expect_context::<CartHub>();
    let total = Memo::new(move |_| cart.with(total_label));
    let is_empty = move || cart.with(Cart::is_empty);

    let clear = move |_: MouseEvent| {
        if let Err(err) = hub.clear() {
            tracing::warn!(error = %err, "failed to clear cart");
        }
    };

    view! {
        <div class="cart-drawer">
            <div class="cart-drawer-header">
                <h3>"Your Cart"</h3>
                <button aria-label="Close cart" on:click=move |_| on_close.run(())>"✕"</button>
            </div>

            <div class="cart-drawer-items">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
                >
                    <ul>
                        {move || cart.with(|cart| {
                            cart.items()
                                .iter()
                                .cloned()
                                .map(|item| view! { <CartRow item=item/> })
                                .collect_view()
                        })}
                    </ul>
                </Show>
            </div>

            <Show when=move || !is_empty()>
                <div class="cart-drawer-footer">
                    <div class="cart-total">
                        <span>"Total:"</span>
                        <span>{move || total.get()}</span>
                    </div>
                    <button class="btn checkout-button" on:click=move |_| on_checkout.run(())>
                        "Go to Checkout"
                    </button>
                    <button class="btn-secondary" on:click=clear.clone()>
                        "Clear Cart"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CartRow(item: CartLineItem) -> impl IntoView {
    let hub = expect_context::<CartHub>();
    let id = item.id;
    let quantity = i64::from(item.quantity);

    let decrease = {
        let hub = hub.clone();
        move |_: MouseEvent| set_quantity(&hub, id, quantity - 1)
    };
    let increase = {
        let hub = hub.clone();
        move |_: MouseEvent| set_quantity(&hub, id, quantity + 1)
    };
    let remove = move |_: MouseEvent| remove_line(&hub, id);

    view! {
        <li class="cart-row">
            <img src=item.image_url.clone() alt=item.name.clone() width="60" height="60"/>
            <div class="cart-row-details">
                <p class="cart-row-name">{item.name.clone()}</p>
                <p class="price">{item.price.display()}</p>
                <div class="quantity-controls">
                    <button on:click=decrease>"-"</button>
                    <span>{item.quantity}</span>
                    <button on:click=increase>"+"</button>
                </div>
            </div>
            <button class="remove-button" aria-label="Remove item" on:click=remove>"✖"</button>
        </li>
    }
}

fn set_quantity(hub: &CartHub, id: ProductId, quantity: i64) {
    // Going below one is rejected by the hub and leaves the row as is.
    if let Err(err) = hub.update_quantity(id, quantity) {
        tracing::debug!(%id, quantity, error = %err, "quantity change ignored");
    }
}

fn remove_line(hub: &CartHub, id: ProductId) {
    if let Err(err) = hub.remove_item(id) {
        tracing::warn!(%id, error = %err, "failed to remove cart line");
    }
}
