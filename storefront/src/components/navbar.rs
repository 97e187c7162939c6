use leptos::prelude::*;
use leptos::ev::MouseEvent;
use pawshop_commerce::cart::Cart;
use pawshop_commerce::checkout::{CheckoutAction, CheckoutMode, CheckoutRequest};
use pawshop_core::{CartHub, NavLink, SiteConfig};

use super::{alert, CartDrawer, CheckoutForm};
use crate::state::{badge_label, set_scroll_locked, NavbarState};

/// Top navigation with cart badge, menu toggle and cart drawer.
///
/// Holds the only cart subscription in the page: the cart signal is
/// refreshed from the hub on mount and on every change, and the drawer
/// renders from it.
#[component]
pub fn Navbar() -> impl IntoView {
    let hub = expect_context::<CartHub>();
    let config = expect_context::<SiteConfig>();

    let cart = cart_signal(&hub);

    let state = RwSignal::new(NavbarState::default());
    Effect::new(move |_| set_scroll_locked(state.with(NavbarState::scroll_locked)));
    on_cleanup(|| set_scroll_locked(false));

    let checkout = RwSignal::new(None::<CheckoutRequest>);
    let mode = config.checkout;

    let toggle_drawer = move |_: MouseEvent| state.update(NavbarState::toggle_drawer);
    let close_drawer = Callback::new(move |()| state.update(NavbarState::close_drawer));
    let close_menu = Callback::new(move |()| state.update(NavbarState::close_menu));
    let begin_checkout = Callback::new(move |()| begin(mode, &cart.get_untracked(), checkout));
    let close_checkout = Callback::new(move |()| checkout.set(None));

    let badge = move || {
        cart.with(badge_label)
            .map(|count| view! { <span class="cart-badge">{count}</span> })
    };

    let links = config.routes.links();
    let menu_links = links.clone();
    let home = config.routes.home.clone();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href=home aria-label="Go to homepage">
                    <img class="logo" src="/Logo.png" alt=config.site_name.clone()/>
                </a>

                <div class="nav-links">
                    <NavLinks links=links on_navigate=close_menu/>
                </div>

                <div class="nav-actions">
                    <button class="cart-button" aria-label="Open cart" on:click=toggle_drawer>
                        "🛒"
                        {badge}
                    </button>
                    <button
                        class="menu-button"
                        aria-label="Open menu"
                        on:click=move |_| state.update(NavbarState::toggle_menu)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <Show when=move || state.with(|s| s.menu_open)>
                <div class="mobile-menu">
                    <NavLinks links=menu_links.clone() on_navigate=close_menu/>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.drawer_open)>
                <CartDrawer
                    cart=cart.read_only()
                    on_close=close_drawer
                    on_checkout=begin_checkout
                />
            </Show>
        </nav>

        {move || checkout.get().map(|request| view! {
            <CheckoutForm request=request on_close=close_checkout/>
        })}
    }
}

/// Signal holding the hub's cart, refreshed on every change.
///
/// The subscription lives until the current owner is cleaned up.
pub(crate) fn cart_signal(hub: &CartHub) -> RwSignal<Cart> {
    let cart = RwSignal::new(hub.read());
    let subscription = hub.subscribe({
        let hub = hub.clone();
        move || cart.set(hub.read())
    });
    on_cleanup(move || drop(subscription));
    cart
}

#[component]
fn NavLinks(links: Vec<NavLink>, on_navigate: Callback<()>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class="nav-link" on:click=move |_| on_navigate.run(())>
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

fn begin(mode: CheckoutMode, cart: &Cart, checkout: RwSignal<Option<CheckoutRequest>>) {
    match mode.begin(cart) {
        Ok(None) => tracing::debug!("checkout ignored for empty cart"),
        Err(err) => tracing::error!(error = %err, lines = cart.len(), "checkout failed"),
        Ok(Some(CheckoutAction::Alert(message))) => {
            tracing::info!(lines = cart.len(), "stub checkout");
            alert(&message);
        }
        Ok(Some(CheckoutAction::OpenForm(request))) => {
            tracing::info!(products = %request.product_names, "checkout form opened");
            checkout.set(Some(request));
        }
    }
}
