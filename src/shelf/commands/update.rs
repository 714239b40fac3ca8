use crate::commands::{helpers, OpResult};
use crate::error::{Result, ShelfError};
use crate::model::Product;
use crate::store::DataStore;
use crate::validate;

pub fn run<S: DataStore>(store: &mut S, id: i64, mut candidate: Product) -> Result<OpResult> {
    let mut products = store.load()?;

    let Some(index) = helpers::position_of(&products, id) else {
        return Err(ShelfError::ProductNotFound(id));
    };

    let outcome = validate::validate(&candidate);
    if !outcome.is_valid() {
        return Ok(OpResult::invalid(
            "Product update failed due to validation errors.",
            outcome,
        ));
    }

    // The identity fields always survive an update, whatever the
    // candidate carries.
    candidate.id = products[index].id;
    candidate.created_at = products[index].created_at;
    products[index] = candidate;
    store.save(&products)?;

    Ok(OpResult::ok("Product updated successfully."))
}
