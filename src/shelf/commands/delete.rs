use crate::commands::{helpers, OpResult};
use crate::error::{Result, ShelfError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<OpResult> {
    let mut products = store.load()?;

    let Some(index) = helpers::position_of(&products, id) else {
        return Err(ShelfError::ProductNotFound(id));
    };

    products.remove(index);
    store.save(&products)?;

    Ok(OpResult::ok("Product deleted successfully."))
}
