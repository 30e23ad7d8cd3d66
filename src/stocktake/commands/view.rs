use crate::commands::{not_found, CmdResult};
use crate::error::Result;
use crate::model::ProductName;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, name: &ProductName) -> Result<CmdResult> {
    match store.get_product(name)? {
        Some(product) => Ok(CmdResult::default().with_viewed_product(product)),
        None => Ok(CmdResult::default().with_message(not_found(name))),
    }
}
