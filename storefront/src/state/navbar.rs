use pawshop_commerce::cart::Cart;

/// Open/closed state of the navbar's two toggles.
///
/// The menu and the cart drawer are independent; both start closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    pub menu_open: bool,
    pub drawer_open: bool,
}

impl NavbarState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Page scroll is locked exactly while the drawer is open.
    pub fn scroll_locked(&self) -> bool {
        self.drawer_open
    }
}

/// Badge text: the number of cart lines, or nothing for an empty cart.
pub fn badge_label(cart: &Cart) -> Option<String> {
    if cart.is_empty() {
        None
    } else {
        Some(cart.len().to_string())
    }
}

/// Shown in place of a total that cannot be computed.
pub(crate) const TOTAL_UNAVAILABLE: &str = "Total unavailable";

/// Cart total formatted for the drawer footer.
pub fn total_label(cart: &Cart) -> String {
    match cart.total() {
        Ok(total) => total.display(),
        Err(err) => {
            tracing::error!(error = %err, lines = cart.len(), "cart total unavailable");
            TOTAL_UNAVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawshop_commerce::prelude::*;

    fn food(quantity: u32) -> CartLineItem {
        CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::from_decimal(100.0, Currency::INR).unwrap(),
            quantity,
        )
        .unwrap()
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = NavbarState::default();
        assert!(!state.menu_open && !state.drawer_open);

        state.toggle_drawer();
        assert!(state.drawer_open);
        assert!(!state.menu_open);
        assert!(state.scroll_locked());

        state.toggle_menu();
        state.close_drawer();
        assert!(state.menu_open);
        assert!(!state.scroll_locked());

        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_badge_hidden_for_empty_cart() {
        assert_eq!(badge_label(&Cart::new()), None);
    }

    #[test]
    fn test_badge_counts_lines_not_units() {
        let mut cart = Cart::new();
        cart.add_item(food(2)).unwrap();
        assert_eq!(badge_label(&cart).as_deref(), Some("1"));
    }

    #[test]
    fn test_total_label() {
        let mut cart = Cart::new();
        assert_eq!(total_label(&cart), "Rs. 0.00");

        cart.add_item(food(2)).unwrap();
        assert_eq!(total_label(&cart), "Rs. 200.00");
        assert_eq!(total_label(&cart), "Rs. 200.00");

        cart.update_quantity(ProductId::new(1), 3).unwrap();
        assert_eq!(total_label(&cart), "Rs. 300.00");
    }

    #[test]
    fn test_total_label_never_shows_zero_for_overflow() {
        let line = CartLineItem {
            price: Money::new(i64::MAX / 2, Currency::INR),
            quantity: 100,
            ..food(1)
        };
        let cart = Cart::from_items(vec![line]);
        assert_eq!(total_label(&cart), TOTAL_UNAVAILABLE);
    }
}
