//! Money type for representing monetary values.
//!
//! Amounts are held in the smallest unit of the currency (paise for INR)
//! so cart totals never accumulate floating-point drift. The persisted cart
//! still carries prices as plain decimal numbers; see [`decimal`].

use crate::cart::MAX_QUANTITY_PER_ITEM;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest price, in minor units, a cart line may carry.
///
/// Any accepted price times the largest line quantity still fits in `i64`.
pub const MAX_PRICE_MINOR: i64 = i64::MAX / MAX_QUANTITY_PER_ITEM as i64;

/// Currencies a price can be in.
///
/// Prices read from the cart slot are always rupees; dollars exist so
/// mixed-currency carts can be rejected rather than silently summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
        }
    }

    /// Get the display prefix used in front of amounts (e.g., "Rs. ").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "Rs. ",
            Currency::USD => "$",
        }
    }

    /// Digits after the decimal point; paise and cents alike.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    fn minor_per_unit(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounded to the nearest
    /// minor unit.
    ///
    /// Fails for non-finite amounts and amounts whose magnitude exceeds
    /// [`MAX_PRICE_MINOR`].
    ///
    /// ```
    /// use pawshop_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(149.99, Currency::INR).unwrap();
    /// assert_eq!(price.amount_minor, 14999);
    /// assert!(Money::from_decimal(1e300, Currency::INR).is_err());
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        let scaled = (amount * currency.minor_per_unit() as f64).round();
        if !scaled.is_finite() || scaled.abs() > MAX_PRICE_MINOR as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_unit() as f64
    }

    /// Format as a display string (e.g., "Rs. 200.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "200.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None if any value is in a different currency or the sum overflows.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter that stores a [`Money`] as a bare decimal number.
///
/// The persisted cart slot predates typed money, so prices there are plain
/// JSON numbers and always INR. Negative prices and prices above
/// [`MAX_PRICE_MINOR`](super::MAX_PRICE_MINOR) are rejected.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(D::Error::custom(format!("invalid price: {amount}")));
        }
        Money::from_decimal(amount, Currency::INR).map_err(D::Error::custom)
    }
}
