//! Field validation for candidate products.
//!
//! Validation is pure: it never touches storage and never fails. Every
//! violated constraint is reported, not just the first one found.

use crate::model::Product;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 20;
pub const DESCRIPTION_MIN: usize = 3;
pub const DESCRIPTION_MAX: usize = 50;

/// A single constraint violation, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The structured pass/fail result of validating one candidate.
///
/// The outcome is valid iff `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a candidate product against the domain constraints.
///
/// # Rules
/// - `name` length must be between 3 and 20 characters
/// - `description` length must be between 3 and 50 characters
/// - `discount` must lie in `[0.0, 1.0]` inclusive
/// - `price` must be non-negative
/// - `quantity` must be non-negative
///
/// # Examples
/// ```
/// use shelf::model::Product;
/// use shelf::validate::validate;
///
/// let good = Product::new(1, "Pen", "Ballpoint pen", 2.0, 0.1, 10);
/// assert!(validate(&good).is_valid());
///
/// let bad = Product::new(1, "Pen", "Ballpoint pen", 2.0, 1.5, 10);
/// assert!(!validate(&bad).is_valid());
/// ```
pub fn validate(candidate: &Product) -> ValidationOutcome {
    let mut errors = Vec::new();

    let name_len = candidate.name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
        errors.push(FieldError {
            field: "name",
            message: format!(
                "Name length must be between {} and {} characters.",
                NAME_MIN, NAME_MAX
            ),
        });
    }

    let description_len = candidate.description.chars().count();
    if !(DESCRIPTION_MIN..=DESCRIPTION_MAX).contains(&description_len) {
        errors.push(FieldError {
            field: "description",
            message: format!(
                "Description length must be between {} and {} characters.",
                DESCRIPTION_MIN, DESCRIPTION_MAX
            ),
        });
    }

    if !(0.0..=1.0).contains(&candidate.discount) {
        errors.push(FieldError {
            field: "discount",
            message: "Discount must be between 0.00 and 1.00.".to_string(),
        });
    }

    if candidate.price < 0.0 {
        errors.push(FieldError {
            field: "price",
            message: "Price cannot be a negative value.".to_string(),
        });
    }

    if candidate.quantity < 0 {
        errors.push(FieldError {
            field: "quantity",
            message: "Quantity cannot be a negative value.".to_string(),
        });
    }

    ValidationOutcome { errors }
}
