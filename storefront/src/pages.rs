//! Routed pages.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::content;
use crate::sections::{
    AboutUs, ContactUs, Gallery, Hero, PetCategories, PetFood, Testimonials, Videos,
};

/// Marketing homepage.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <PetCategories/>
        <PetFood/>
        <AboutUs/>
        <Gallery/>
        <Videos/>
        <Testimonials/>
        <ContactUs/>
    }
}

/// Full product listing.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <h2>"All Products"</h2>
        <div class="products">
            {content::products()
                .into_iter()
                .map(|product| view! { <ProductCard product=product/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <ContactUs/> }
}
