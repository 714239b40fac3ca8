use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

/// Caller-supplied record filter.
pub type Predicate<'a> = &'a dyn Fn(&Product) -> bool;

/// All products, optionally narrowed by a predicate. File order is
/// preserved either way.
pub fn run<S: DataStore>(store: &S, filter: Option<Predicate>) -> Result<Vec<Product>> {
    let products = store.load()?;
    Ok(match filter {
        Some(matches) => products.into_iter().filter(|p| matches(p)).collect(),
        None => products,
    })
}

/// First product matching the predicate, in file order.
///
/// Callers are expected to supply effectively-unique predicates (ID
/// equality in practice); on multiple matches the earliest record wins.
pub fn first<S: DataStore>(store: &S, filter: Predicate) -> Result<Option<Product>> {
    let products = run(store, Some(filter))?;
    Ok(products.into_iter().next())
}
