use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    poisoned: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `load` always fails as if the backing data were
    /// unparsable. Lets callers exercise corrupt-file handling without
    /// touching a filesystem.
    pub fn poisoned() -> Self {
        Self {
            products: Vec::new(),
            poisoned: true,
        }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        if self.poisoned {
            // Manufacture a real decode error so callers see the same
            // variant a corrupt file would produce.
            let err = serde_json::from_str::<Vec<Product>>("not json")
                .expect_err("decoding garbage must fail");
            return Err(ShelfError::CorruptData(err));
        }
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A product with valid fields and the given ID.
    pub fn sample(id: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            format!("Description for product {}", id),
            10.0 * id as f64,
            0.0,
            id,
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` valid products with IDs `1..=count`.
        pub fn with_products(mut self, count: i64) -> Self {
            let products: Vec<Product> = (1..=count).map(sample).collect();
            self.store.save(&products).unwrap();
            self
        }

        pub fn with_product(mut self, product: Product) -> Self {
            let mut products = self.store.load().unwrap();
            products.push(product);
            self.store.save(&products).unwrap();
            self
        }
    }
}
