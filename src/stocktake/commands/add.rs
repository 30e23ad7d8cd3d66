use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductName};
use crate::store::DataStore;

/// Adds a product. An existing product with the same name is left alone and the new
/// quantity and price are discarded.
pub fn run<S: DataStore>(
    store: &mut S,
    name: ProductName,
    quantity: u64,
    price: f64,
) -> Result<CmdResult> {
    if store.contains(&name)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Product '{}' already exists.",
            name
        ))));
    }

    let product = Product::new(name, quantity, price);
    store.save_product(&product)?;

    let message = CmdMessage::success(format!("Product '{}' added successfully.", product.name));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_products(vec![product]))
}
