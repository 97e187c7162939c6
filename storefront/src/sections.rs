//! Homepage sections. Only the pet food section touches the cart.

use leptos::prelude::*;
use pawshop_core::SiteConfig;

use crate::components::ProductCard;
use crate::content::{self, GALLERY, TESTIMONIALS, VIDEOS};
use crate::state::Carousel;

// ============================================================================
// Hero
// ============================================================================

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="hero">
            <h1>"Everything your pet needs, under one roof"</h1>
            <p>"Healthy pets, quality food and friendly advice since day one."</p>
            <a href=config.routes.products class="btn">"Shop Now"</a>
        </section>
    }
}

// ============================================================================
// Pet categories
// ============================================================================

#[component]
pub fn PetCategories() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="pet-categories" id="pet-categories">
            <h2>"Pets"</h2>
            <div class="category-grid">
                {content::categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="category-card">
                                <img src=category.image_src alt=category.image_alt/>
                                <h3>{category.title}</h3>
                                <p>{category.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <a href=config.routes.products class="btn">"View More"</a>
        </section>
    }
}

// ============================================================================
// Pet food
// ============================================================================

#[component]
pub fn PetFood() -> impl IntoView {
    view! {
        <section class="pet-food" id="pet-food">
            <h2>"Pet Food"</h2>
            <div class="products">
                {content::pet_food()
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>
        </section>
    }
}

// ============================================================================
// About, gallery, videos
// ============================================================================

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <h2>"About Us"</h2>
            <p>
                "We are a neighbourhood pet shop caring for dogs, cats, birds and fish. "
                "Our team helps you pick the right companion and keeps them healthy "
                "with food, accessories and regular check-ups."
            </p>
        </section>
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section class="gallery" id="gallery">
            <h2>"Gallery"</h2>
            <div class="gallery-grid">
                {GALLERY
                    .iter()
                    .map(|image| view! { <img src=image.src alt=image.alt/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Videos() -> impl IntoView {
    view! {
        <section class="videos" id="videos">
            <h2>"Videos"</h2>
            <div class="video-grid">
                {VIDEOS
                    .iter()
                    .map(|video| {
                        view! {
                            <figure>
                                <video src=video.src controls=true preload="metadata"></video>
                                <figcaption>{video.title}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// ============================================================================
// Testimonials
// ============================================================================

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || carousel.with(|c| c.current(&TESTIMONIALS).copied());

    view! {
        <section class="testimonials">
            <h2>"Customer Testimonials"</h2>
            <div class="testimonial">
                {move || current().map(|t| view! {
                    <p class="testimonial-text">{t.text}</p>
                    <p class="testimonial-author">"- " {t.name}</p>
                })}
            </div>
            <button
                class="carousel-prev"
                aria-label="Previous Testimonial"
                on:click=move |_| carousel.update(Carousel::prev)
            >
                "‹"
            </button>
            <button
                class="carousel-next"
                aria-label="Next Testimonial"
                on:click=move |_| carousel.update(Carousel::next)
            >
                "›"
            </button>
        </section>
    }
}

// ============================================================================
// Contact and footer
// ============================================================================

#[component]
pub fn ContactUs() -> impl IntoView {
    view! {
        <section class="contact" id="contact">
            <h2>"Contact Us"</h2>
            <p>"Visit us at 12 MG Road, Pune, open every day from 10am to 8pm."</p>
            <p>"Phone: " <a href="tel:+919876543210">"+91 98765 43210"</a></p>
            <p>"Email: " <a href="mailto:hello@pawshop.example">"hello@pawshop.example"</a></p>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let links = config.routes.links();

    view! {
        <footer>
            <nav class="footer-links">
                {links
                    .into_iter()
                    .map(|link| view! { <a href=link.href>{link.label}</a> })
                    .collect_view()}
            </nav>
            <p>{format!("© {}. All rights reserved.", config.site_name)}</p>
        </footer>
    }
}
