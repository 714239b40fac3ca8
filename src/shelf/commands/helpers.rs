use crate::model::Product;
use crate::store::DataStore;

/// Returned by [`next_id`] when the collection cannot be loaded.
pub const SENTINEL_ID: i64 = -1;

/// Next free product ID: `1` for an empty collection, otherwise
/// `max(id) + 1`.
///
/// There is no persisted counter, so deleting the record holding the
/// maximum ID frees that ID for the next create.
///
/// On a load failure this returns [`SENTINEL_ID`] instead of an error;
/// callers must check for it before using the value as an ID.
pub fn next_id<S: DataStore>(store: &S) -> i64 {
    match store.load() {
        Ok(products) => products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1),
        Err(_) => SENTINEL_ID,
    }
}

/// Position of the record with the given ID, if present.
pub fn position_of(products: &[Product], id: i64) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}
