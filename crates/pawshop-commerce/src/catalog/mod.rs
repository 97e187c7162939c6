//! Product catalog module.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
