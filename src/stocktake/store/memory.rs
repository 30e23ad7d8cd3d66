use super::DataStore;
use crate::error::Result;
use crate::model::{Product, ProductName};
use tracing::debug;

/// In-memory, insertion-ordered product storage.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `products`, in order. Later duplicates are dropped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();
        for product in products {
            if store.position(&product.name).is_none() {
                store.products.push(product);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, name: &ProductName) -> Option<usize> {
        self.products.iter().position(|p| &p.name == name)
    }
}

impl DataStore for InMemoryStore {
    fn save_product(&mut self, product: &Product) -> Result<()> {
        match self.position(&product.name) {
            Some(idx) => self.products[idx] = product.clone(),
            None => self.products.push(product.clone()),
        }
        debug!(
            name = %product.name,
            quantity = product.quantity,
            price = product.price,
            "saved product"
        );
        Ok(())
    }

    fn get_product(&self, name: &ProductName) -> Result<Option<Product>> {
        Ok(self.position(name).map(|idx| self.products[idx].clone()))
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn delete_product(&mut self, name: &ProductName) -> Result<Option<Product>> {
        let removed = self.position(name).map(|idx| self.products.remove(idx));
        if removed.is_some() {
            debug!(name = %name, "deleted product");
        }
        Ok(removed)
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::{name, product};
    use super::*;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = InMemoryStore::new();
        store.save_product(&product("shirts", 1, 1.0)).unwrap();
        store.save_product(&product("ties", 2, 2.0)).unwrap();
        store.save_product(&product("belts", 3, 3.0)).unwrap();

        let names: Vec<String> = store
            .list_products()
            .unwrap()
            .into_iter()
            .map(|p| p.name.to_string())
            .collect();
        assert_eq!(names, vec!["shirts", "ties", "belts"]);
    }

    #[test]
    fn save_replaces_in_place() {
        let mut store = InMemoryStore::new();
        store.save_product(&product("shirts", 1, 1.0)).unwrap();
        store.save_product(&product("ties", 2, 2.0)).unwrap();
        store.save_product(&product("shirts", 9, 1.0)).unwrap();

        let listed = store.list_products().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], product("shirts", 9, 1.0));
    }

    #[test]
    fn readding_after_delete_moves_to_end() {
        let mut store = InMemoryStore::new();
        store.save_product(&product("shirts", 1, 1.0)).unwrap();
        store.save_product(&product("ties", 2, 2.0)).unwrap();
        store.delete_product(&name("shirts")).unwrap();
        store.save_product(&product("shirts", 1, 1.0)).unwrap();

        let listed = store.list_products().unwrap();
        assert_eq!(listed[0].name, name("ties"));
        assert_eq!(listed[1].name, name("shirts"));
    }

    #[test]
    fn delete_missing_returns_none() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.delete_product(&name("ghost")).unwrap(), None);
    }

    #[test]
    fn with_products_keeps_first_duplicate() {
        let store =
            InMemoryStore::with_products([product("suits", 1, 1.0), product("suits", 2, 2.0)]);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_product(&name("suits")).unwrap(),
            Some(product("suits", 1, 1.0))
        );
    }
}
