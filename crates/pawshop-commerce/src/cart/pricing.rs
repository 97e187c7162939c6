//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all line totals.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Total formatted for display (e.g., "Rs. 200.00").
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_total_display() {
        let pricing = CartPricing {
            total: Money::new(20000, Currency::INR),
            line_items: vec![LineItemPricing {
                product_id: ProductId::new(1),
                unit_price: Money::new(10000, Currency::INR),
                quantity: 2,
                total: Money::new(20000, Currency::INR),
            }],
        };
        assert_eq!(pricing.total_display(), "Rs. 200.00");
    }
}
