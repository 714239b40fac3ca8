use crate::model::Product;
use crate::validate::ValidationOutcome;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod update;

/// Outcome of a mutating operation (create, update, delete).
#[derive(Debug)]
pub struct OpResult {
    pub success: bool,
    pub message: String,
    pub validation: Option<ValidationOutcome>,
}

impl OpResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            validation: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            validation: None,
        }
    }

    pub fn invalid(message: impl Into<String>, outcome: ValidationOutcome) -> Self {
        Self {
            success: false,
            message: message.into(),
            validation: Some(outcome),
        }
    }
}

/// Outcome of a collection query.
///
/// `products: None` means the collection could not be read at all, which
/// is distinct from a successful read with zero matches (`Some(vec![])`).
#[derive(Debug, Default)]
pub struct QueryResult {
    pub products: Option<Vec<Product>>,
    pub message: Option<String>,
}

/// Outcome of a single-record lookup.
#[derive(Debug, Default)]
pub struct SingleResult {
    pub product: Option<Product>,
    pub message: Option<String>,
}
