use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductName;
use crate::store::DataStore;

/// Sets the quantity of an existing product. The price is never touched.
pub fn run<S: DataStore>(store: &mut S, name: &ProductName, quantity: u64) -> Result<CmdResult> {
    let Some(mut product) = store.get_product(name)? else {
        return Ok(CmdResult::default().with_message(not_found(name)));
    };

    product.quantity = quantity;
    store.save_product(&product)?;

    let message = CmdMessage::success(format!("Product '{}' quantity updated.", name));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_products(vec![product]))
}
