//! Application shell, routing and shared state.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pawshop_cache::{Cache, CartStore};
use pawshop_core::{CartHub, SiteConfig};

use crate::components::Navbar;
use crate::pages::{ContactPage, HomePage, ProductsPage};
use crate::sections::Footer;

const SITE_CONFIG: &str = include_str!("../pawshop.toml");

// ============================================================================
// Startup
// ============================================================================

/// Parse the site config and install logging.
///
/// An invalid config falls back to the defaults; the problem is logged once
/// logging is up.
fn bootstrap(source: &str) -> SiteConfig {
    let (config, error) = match SiteConfig::from_toml_str(source) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    pawshop_observability::init(&config.logging);
    if let Some(err) = error {
        tracing::warn!(error = %err, "invalid site config, using defaults");
    }
    config
}

/// The cart hub backed by local storage, or memory when storage is unavailable.
fn open_hub(config: &SiteConfig) -> CartHub {
    #[cfg(target_arch = "wasm32")]
    {
        match CartHub::browser(&config.storage_key) {
            Ok(hub) => return hub,
            Err(err) => {
                tracing::warn!(error = %err, "local storage unavailable, cart will not persist");
            }
        }
    }

    CartHub::new(CartStore::with_key(
        Cache::in_memory(),
        config.storage_key.clone(),
    ))
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = bootstrap(SITE_CONFIG);
    let hub = open_hub(&config);
    tracing::info!(
        checkout = config.checkout.as_str(),
        key = %config.storage_key,
        lines = hub.read().len(),
        "storefront started"
    );

    let title = config.site_name.clone();
    provide_context(hub);
    provide_context(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Pawshop - pets, pet food and accessories"/>
        <Title text=title/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/product") view=ProductsPage/>
                    <Route path=path!("/Product") view=ProductsPage/>
                    <Route path=path!("/contactuspage") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawshop_commerce::checkout::CheckoutMode;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_CONFIG).unwrap();
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.routes.products, "/product");
    }

    #[test]
    fn test_bootstrap_falls_back_to_defaults() {
        assert_eq!(bootstrap("checkout = [1, 2"), SiteConfig::default());
        assert_eq!(bootstrap("checkout = \"stub\"").checkout, CheckoutMode::Stub);
    }

    #[test]
    fn test_hub_uses_configured_key() {
        let config = SiteConfig {
            storage_key: "pawshop-cart".to_string(),
            ..SiteConfig::default()
        };
        let hub = open_hub(&config);
        assert_eq!(hub.store().key(), "pawshop-cart");
        assert!(hub.read().is_empty());
    }
}
