//! Pet categories shown on the homepage grid.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A pet category card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Card title (e.g., "Dogs").
    pub title: String,
    /// Card blurb.
    pub description: String,
    /// Photo reference.
    pub image_src: String,
    /// Alt text for the photo.
    pub image_alt: String,
    /// Where the card links to.
    pub link: String,
}

impl Category {
    /// Create a new category; alt text defaults to the title.
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        description: impl Into<String>,
        image_src: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id,
            image_alt: title.clone(),
            title,
            description: description.into(),
            image_src: image_src.into(),
            link: link.into(),
        }
    }
}
