use crate::commands::OpResult;
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;
use crate::validate;

pub fn run<S: DataStore>(store: &mut S, candidate: Product) -> Result<OpResult> {
    let outcome = validate::validate(&candidate);
    if !outcome.is_valid() {
        return Ok(OpResult::invalid(
            "Failed to create product due to validation errors.",
            outcome,
        ));
    }

    let mut products = store.load()?;
    products.push(candidate);
    store.save(&products)?;

    Ok(OpResult::ok("Product created successfully."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, helpers};
    use crate::store::memory::InMemoryStore;

    fn candidate(id: i64) -> Product {
        Product::new(id, "Cup", "Ceramic mug", 5.0, 0.0, 3)
    }

    #[test]
    fn creates_first_product_with_id_one() {
        let mut store = InMemoryStore::new();

        let id = helpers::next_id(&store);
        assert_eq!(id, 1);

        let result = run(&mut store, candidate(id)).unwrap();
        assert!(result.success);
        assert!(result.validation.is_none());

        let products = store.load().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Cup");
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, candidate(1)).unwrap();
        run(&mut store, Product::new(2, "Pen", "Ballpoint pen", 2.0, 0.1, 10)).unwrap();

        let products = get::run(&store, None).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 2);
    }

    #[test]
    fn rejects_invalid_candidate_without_writing() {
        let mut store = InMemoryStore::new();

        let mut bad = candidate(1);
        bad.name = "ab".to_string();
        bad.discount = 1.5;

        let result = run(&mut store, bad).unwrap();
        assert!(!result.success);

        let outcome = result.validation.expect("validation outcome attached");
        assert_eq!(outcome.errors.len(), 2);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn created_product_is_findable_by_id() {
        let mut store = InMemoryStore::new();
        let product = candidate(1);
        let created_at = product.created_at;
        run(&mut store, product).unwrap();

        let found = get::first(&store, &|p: &Product| p.id == 1)
            .unwrap()
            .expect("product present");
        assert_eq!(found.name, "Cup");
        assert_eq!(found.created_at, created_at);
    }
}
