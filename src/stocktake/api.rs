//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for inventory
//! operations, whatever the front end.
//!
//! The API:
//! - **Dispatches** to the matching command
//! - **Owns the store**, so the front end holds one value instead of ambient state
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend. The binary and the tests
//! both use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductName};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

pub struct InventoryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_product(
        &mut self,
        name: ProductName,
        quantity: u64,
        price: f64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, quantity, price)
    }

    pub fn view_product(&self, name: &ProductName) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, name)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_quantity(
        &mut self,
        name: &ProductName,
        quantity: u64,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, name, quantity)
    }

    pub fn remove_product(&mut self, name: &ProductName) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl InventoryApi<InMemoryStore> {
    /// An in-memory inventory holding `seed`, in order.
    pub fn in_memory(seed: impl IntoIterator<Item = Product>) -> Self {
        Self::new(InMemoryStore::with_products(seed))
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{name, product};

    fn api() -> InventoryApi<InMemoryStore> {
        InventoryApi::in_memory([product("suits", 30, 12000.0)])
    }

    #[test]
    fn add_then_view_round_trips() {
        let mut api = api();
        api.add_product(name("Blue Suit"), 5, 999.5).unwrap();

        let result = api.view_product(&name("blue suit")).unwrap();
        assert_eq!(result.viewed_product, Some(product("blue suit", 5, 999.5)));
    }

    #[test]
    fn list_dispatches_to_store() {
        let result = api().list_products().unwrap();
        assert_eq!(result.listed_products, vec![product("suits", 30, 12000.0)]);
    }

    #[test]
    fn update_dispatches_with_quantity() {
        let mut api = api();
        let result = api.update_quantity(&name("suits"), 12).unwrap();
        assert_eq!(result.affected_products, vec![product("suits", 12, 12000.0)]);
    }

    #[test]
    fn remove_dispatches_to_store() {
        let mut api = api();
        api.remove_product(&name("suits")).unwrap();
        assert!(api.store().is_empty());
    }
}
