//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between inventory logic and where products live.
//! Commands are generic over it, so they can be tested against a store built on the spot.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Nothing is persisted; the store lives for
//!   the duration of the process.
//!
//! ## Ordering
//!
//! `list_products` returns products in insertion order. Removing a product and adding it again
//! moves it to the end.

use crate::error::Result;
use crate::model::{Product, ProductName};

pub mod memory;

/// Abstract interface for product storage.
///
/// The store does not validate: names arrive normalized and numbers arrive non-negative.
/// It also does not decide policy; refusing duplicates is the add command's job.
pub trait DataStore {
    /// Insert a product, or replace the record with the same name in place
    fn save_product(&mut self, product: &Product) -> Result<()>;

    /// Get a product by name, `None` if absent
    fn get_product(&self, name: &ProductName) -> Result<Option<Product>>;

    /// List all products in insertion order
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Delete a product, returning it if it was present
    fn delete_product(&mut self, name: &ProductName) -> Result<Option<Product>>;

    fn contains(&self, name: &ProductName) -> Result<bool> {
        Ok(self.get_product(name)?.is_some())
    }
}
