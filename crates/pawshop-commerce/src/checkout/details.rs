//! Customer details collected by the checkout form.

use crate::checkout::CheckoutRequest;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Required number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Contact details entered on the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutDetails {
    /// Customer name.
    pub customer_name: String,
    /// Phone number; separators are allowed, digits are counted.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Optional note for the shop.
    pub note: Option<String>,
}

/// A single invalid form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl CheckoutDetails {
    /// Every problem with the entered details, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(FieldError {
                field: "customer_name",
                message: "Name is required",
            });
        }

        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        let only_phone_chars = self
            .phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
        if digits != PHONE_DIGITS || !only_phone_chars {
            errors.push(FieldError {
                field: "phone",
                message: "Phone number must have 10 digits",
            });
        }

        if self.address.trim().is_empty() {
            errors.push(FieldError {
                field: "address",
                message: "Address is required",
            });
        }

        errors
    }

    /// Check if all required fields are valid.
    pub fn is_complete(&self) -> bool {
        self.errors().is_empty()
    }

    /// Validate, folding every field error into one message.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let errors = self.errors();
        if errors.is_empty() {
            return Ok(());
        }
        Err(CommerceError::Validation(
            errors
                .iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        ))
    }

    /// Confirmation text shown after a valid submission.
    pub fn confirmation(&self, request: &CheckoutRequest) -> String {
        format!(
            "Thank you, {}! We will call {} to confirm your order of {} ({}).",
            self.customer_name.trim(),
            self.phone.trim(),
            request.product_names,
            request.total.display()
        )
    }
}
