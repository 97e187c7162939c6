//! UI state that lives outside the view tree.
//!
//! Everything here is plain data so it can be tested without a browser;
//! components keep it in signals.

mod carousel;
mod navbar;
mod scroll_lock;

pub use carousel::Carousel;
pub use navbar::{badge_label, total_label, NavbarState};
pub use scroll_lock::{overflow_value, set_scroll_locked};
