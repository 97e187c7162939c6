//! Static storefront content.

use pawshop_commerce::catalog::{Category, Product};
use pawshop_commerce::{CategoryId, Currency, Money, ProductId};

pub const DOGS: CategoryId = CategoryId::new(1);
pub const BIRDS: CategoryId = CategoryId::new(2);
pub const CATS: CategoryId = CategoryId::new(3);
pub const FISH: CategoryId = CategoryId::new(4);

/// A customer quote in the testimonials carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Rahul Vaidya",
        text: "I always take my dogs to their vets as they are more experienced and trustworthy.",
    },
    Testimonial {
        name: "Rashi Gupta",
        text: "I bought a hamster from them for my little brother and they guided me very well during and after the purchase.",
    },
    Testimonial {
        name: "Anjali Sharma",
        text: "The staff is incredibly knowledgeable and helped me choose the perfect food for my picky cat.",
    },
    Testimonial {
        name: "Suresh Menon",
        text: "Great selection of toys and accessories. My parrot loves the new climbing rope I got from here!",
    },
];

/// Image in the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: [GalleryImage; 6] = [
    GalleryImage { src: "/Gallery1.jpeg", alt: "Puppy at play" },
    GalleryImage { src: "/Gallery2.jpeg", alt: "Parrot on a perch" },
    GalleryImage { src: "/Gallery3.jpeg", alt: "Kitten napping" },
    GalleryImage { src: "/Gallery4.jpeg", alt: "Aquarium tank" },
    GalleryImage { src: "/Gallery5.jpeg", alt: "Grooming session" },
    GalleryImage { src: "/Gallery6.jpeg", alt: "Store front" },
];

/// Clip in the videos section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub src: &'static str,
}

pub const VIDEOS: [Video; 3] = [
    Video { title: "A day at the shop", src: "/videos/shop-tour.mp4" },
    Video { title: "Feeding time", src: "/videos/feeding.mp4" },
    Video { title: "Meet our birds", src: "/videos/birds.mp4" },
];

/// Pet categories for the homepage grid.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            DOGS,
            "Dogs",
            "Find the perfect canine companion! We offer a variety of dog breeds, from playful puppies to loyal adult dogs.",
            "/Dog.jpeg",
            "/dogs",
        ),
        Category::new(
            BIRDS,
            "Birds",
            "Add a touch of color and song to your life! Explore our range of beautiful birds, from finches to parrots.",
            "/Birds.jpeg",
            "/birds",
        ),
        Category::new(
            CATS,
            "Cats",
            "Discover your purrfect feline friend! Our selection includes cuddly kittens and graceful adult cats, all ready for a loving home.",
            "/Cat.jpeg",
            "/cats",
        ),
        Category::new(
            FISH,
            "Small Fish",
            "Create a mesmerizing underwater world! We have a diverse collection of colorful freshwater and saltwater fish.",
            "/Fish.jpeg",
            "/fish",
        ),
    ]
}

fn inr(rupees: i64) -> Money {
    Money::new(rupees * 100, Currency::INR)
}

/// Food products featured on the homepage.
pub fn pet_food() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Dog Food", "/DogFood.png", inr(850))
            .with_description("Chicken and rice kibble for adult dogs, 3 kg.")
            .in_category(DOGS),
        Product::new(ProductId::new(2), "Bird Seed Mix", "/BirdFood.png", inr(320))
            .with_description("Millet and sunflower blend for finches and parrots.")
            .in_category(BIRDS),
        Product::new(ProductId::new(3), "Cat Food", "/CatFood.png", inr(650))
            .with_description("Tuna pouches for picky eaters, pack of 12.")
            .in_category(CATS),
        Product::new(ProductId::new(4), "Fish Flakes", "/FishFood.png", inr(180))
            .with_description("Daily flakes for tropical freshwater fish.")
            .in_category(FISH),
    ]
}

/// Everything on the product listing page.
pub fn products() -> Vec<Product> {
    let mut products = pet_food();
    products.extend([
        Product::new(ProductId::new(5), "Chew Toy", "/ChewToy.png", inr(250))
            .with_description("Natural rubber toy for strong chewers.")
            .in_category(DOGS),
        Product::new(ProductId::new(6), "Climbing Rope", "/Rope.png", inr(400))
            .with_description("Cotton rope perch for parrots and cockatiels.")
            .in_category(BIRDS),
        Product::new(ProductId::new(7), "Scratching Post", "/ScratchPost.png", inr(1200))
            .with_description("Sisal post with a plush top platform.")
            .in_category(CATS),
        Product::new(ProductId::new(8), "Aquarium Filter", "/Filter.png", inr(1500))
            .with_description("Quiet internal filter for tanks up to 80 litres.")
            .in_category(FISH),
    ]);
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_categories() {
        let titles: Vec<_> = categories().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Dogs", "Birds", "Cats", "Small Fish"]);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_product_fits_in_the_cart() {
        for product in products() {
            let line = product.to_line_item(1).unwrap();
            assert!(!line.price.is_negative());
            assert!(product.category_id.is_some());
        }
    }

    #[test]
    fn test_pet_food_is_listed() {
        let listed: HashSet<_> = products().into_iter().map(|p| p.id).collect();
        assert!(pet_food().iter().all(|p| listed.contains(&p.id)));
        assert_eq!(pet_food()[0].price_display(), "Rs. 850.00");
    }

    #[test]
    fn test_testimonials() {
        assert_eq!(TESTIMONIALS.len(), 4);
        assert_eq!(TESTIMONIALS[0].name, "Rahul Vaidya");
    }
}
