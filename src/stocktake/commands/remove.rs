use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductName;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &ProductName) -> Result<CmdResult> {
    match store.delete_product(name)? {
        Some(product) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Product '{}' removed.", name)))
            .with_affected_products(vec![product])),
        None => Ok(CmdResult::default().with_message(not_found(name))),
    }
}
