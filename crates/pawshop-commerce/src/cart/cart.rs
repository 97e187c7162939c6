//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money, MAX_PRICE_MINOR};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A line in the cart, in the exact shape persisted to browser storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Display asset reference.
    pub image_url: String,
    /// Unit price. Never pre-multiplied by quantity.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,
    /// Number of units, at least one.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a new line item.
    ///
    /// Returns an error if quantity is zero or above [`MAX_QUANTITY_PER_ITEM`],
    /// or if the price is negative or above [`MAX_PRICE_MINOR`].
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, CommerceError> {
        validate_quantity(i64::from(quantity))?;
        validate_price(&price)?;
        Ok(Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
            price,
            quantity,
        })
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart: an ordered list of line items.
///
/// Serializes as a bare JSON array. Ids are not enforced unique; operations
/// keyed by id apply to every line carrying that id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines without validation.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Consume the cart and return its lines.
    pub fn into_items(self) -> Vec<CartLineItem> {
        self.items
    }

    /// Add an item to the cart.
    ///
    /// Adding a product already in the cart increases that line's quantity.
    pub fn add_item(&mut self, item: CartLineItem) -> Result<(), CommerceError> {
        validate_quantity(i64::from(item.quantity))?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let new_quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            validate_quantity(i64::from(new_quantity))?;
            existing.quantity = new_quantity;
            return Ok(());
        }

        self.items.push(item);
        Ok(())
    }

    /// Remove every line with the given product id.
    ///
    /// Returns `false` when no line matched; the cart is then unchanged.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Set the quantity of every line with the given product id.
    ///
    /// Quantities below one are rejected and leave the cart untouched.
    /// Returns whether any line actually changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<bool, CommerceError> {
        let quantity = validate_quantity(quantity)?;

        let mut changed = false;
        for item in self.items.iter_mut().filter(|i| i.id == id) {
            if item.quantity != quantity {
                item.quantity = quantity;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop lines that break the quantity invariant.
    ///
    /// Lines with zero quantity are removed and oversized quantities are
    /// capped. Returns the number of lines touched.
    pub fn sanitize(&mut self) -> usize {
        let len_before = self.items.len();
        self.items.retain(|i| i.quantity >= 1);
        let mut touched = len_before - self.items.len();

        for item in self.items.iter_mut() {
            if item.quantity > MAX_QUANTITY_PER_ITEM {
                item.quantity = MAX_QUANTITY_PER_ITEM;
                touched += 1;
            }
        }
        touched
    }

    /// Number of line entries. This is what the navbar badge shows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the first line for a product.
    pub fn get_item(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Product names joined for display, e.g. "Dog Food, Bird Seed".
    pub fn product_names(&self) -> String {
        self.items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Currency of the cart, taken from its first line.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or_default()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.calculate_pricing()?.total)
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs or lines mix currencies.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let currency = self.currency();

        let line_items = self
            .items
            .iter()
            .map(|item| {
                if item.price.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency.code().to_string(),
                        got: item.price.currency.code().to_string(),
                    });
                }
                Ok(LineItemPricing {
                    product_id: item.id,
                    unit_price: item.price,
                    quantity: item.quantity,
                    total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = Money::try_sum(line_items.iter().map(|l| &l.total), currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing { total, line_items })
    }
}

fn validate_quantity(quantity: i64) -> Result<u32, CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > i64::from(MAX_QUANTITY_PER_ITEM) {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            i64::from(MAX_QUANTITY_PER_ITEM),
        ));
    }
    Ok(quantity as u32)
}

fn validate_price(price: &Money) -> Result<(), CommerceError> {
    if price.is_negative() || price.amount_minor > MAX_PRICE_MINOR {
        return Err(CommerceError::InvalidPrice(price.to_decimal().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn seed(quantity: u32) -> CartLineItem {
        CartLineItem::new(
            ProductId::new(2),
            "Bird Seed",
            "/seed.png",
            Money::from_decimal(45.5, Currency::INR).unwrap(),
            quantity,
        )
        .unwrap()
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let result = CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::zero(Currency::INR),
            0,
        );
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_line_item_rejects_out_of_range_price() {
        let huge = CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::new(MAX_PRICE_MINOR + 1, Currency::INR),
            1,
        );
        assert!(matches!(huge, Err(CommerceError::InvalidPrice(_))));

        let negative = CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::new(-100, Currency::INR),
            1,
        );
        assert!(matches!(negative, Err(CommerceError::InvalidPrice(_))));
    }

    #[test]
    fn test_max_price_line_totals_without_overflow() {
        let item = CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::new(MAX_PRICE_MINOR, Currency::INR),
            MAX_QUANTITY_PER_ITEM,
        )
        .unwrap();
        assert!(item.line_total().is_ok());
    }

    #[test]
    fn test_slot_with_oversized_price_does_not_parse() {
        let json = r#"[{"id":1,"name":"Food","imageUrl":"/food.png","price":1e15,"quantity":100}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());

        let json = r#"[{"id":1,"name":"Food","imageUrl":"/food.png","price":1e300,"quantity":1}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(food(2)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().unwrap().display(), "Rs. 200.00");
    }

    #[test]
    fn test_add_existing_item_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(food(2)).unwrap();
        cart.add_item(food(1)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_item_over_limit() {
        let mut cart = Cart::new();
        cart.add_item(food(MAX_QUANTITY_PER_ITEM)).unwrap();
        let err = cart.add_item(food(1)).unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(10000, 9999)));
        assert_eq!(cart.item_count(), u64::from(MAX_QUANTITY_PER_ITEM));
    }

    #[test]
    fn test_update_quantity_changes_total() {
        let mut cart = Cart::from_items(vec![food(2)]);
        assert!(cart.update_quantity(ProductId::new(1), 3).unwrap());
        assert_eq!(cart.total().unwrap().display(), "Rs. 300.00");
        // Unit price is untouched by quantity changes.
        assert_eq!(cart.items()[0].price.display(), "Rs. 100.00");
    }

    #[test]
    fn test_update_quantity_below_one_is_rejected() {
        let mut cart = Cart::from_items(vec![food(2)]);
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity(ProductId::new(1), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.update_quantity(ProductId::new(1), -4),
            Err(CommerceError::InvalidQuantity(-4))
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_unknown_or_same_is_unchanged() {
        let mut cart = Cart::from_items(vec![food(2)]);
        assert!(!cart.update_quantity(ProductId::new(99), 5).unwrap());
        assert!(!cart.update_quantity(ProductId::new(1), 2).unwrap());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::from_items(vec![food(2), seed(1)]);
        assert!(cart.remove_item(ProductId::new(1)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "Bird Seed");
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = Cart::from_items(vec![food(2)]);
        let before = cart.clone();
        assert!(!cart.remove_item(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let mut cart = Cart::from_items(vec![food(1), seed(1), food(4)]);
        assert!(cart.remove_item(ProductId::new(1)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_over_several_lines() {
        let cart = Cart::from_items(vec![food(2), seed(3)]);
        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[1].total.amount_minor, 13650);
        assert_eq!(pricing.total.display(), "Rs. 336.50");
    }

    #[test]
    fn test_mixed_currency_total_fails() {
        let mut dollars = seed(1);
        dollars.price = Money::new(100, Currency::USD);
        let cart = Cart::from_items(vec![food(1), dollars]);
        assert!(matches!(
            cart.total(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total().unwrap().display(), "Rs. 0.00");
        assert_eq!(cart.product_names(), "");
    }

    #[test]
    fn test_product_names() {
        let cart = Cart::from_items(vec![food(1), seed(1)]);
        assert_eq!(cart.product_names(), "Food, Bird Seed");
    }

    #[test]
    fn test_sanitize_drops_empty_lines() {
        let mut empty = seed(1);
        empty.quantity = 0;
        let mut huge = food(1);
        huge.quantity = 50_000;
        let mut cart = Cart::from_items(vec![empty, huge]);

        assert_eq!(cart.sanitize(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_wire_format() {
        let cart = Cart::from_items(vec![food(2)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "name": "Food",
                "imageUrl": "/food.png",
                "price": 100.0,
                "quantity": 2
            }])
        );
    }

    #[test]
    fn test_reads_integer_prices() {
        let cart: Cart = serde_json::from_str(
            r#"[{"id":1,"name":"Food","imageUrl":"/f.png","price":100,"quantity":2}]"#,
        )
        .unwrap();
        assert_eq!(cart.total().unwrap().display(), "Rs. 200.00");
    }

    #[test]
    fn test_rejects_negative_price() {
        let result: Result<Cart, _> = serde_json::from_str(
            r#"[{"id":1,"name":"Food","imageUrl":"/f.png","price":-1,"quantity":2}]"#,
        );
        assert!(result.is_err());
    }
}
