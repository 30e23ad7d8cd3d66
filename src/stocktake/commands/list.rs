use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let products = store.list_products()?;
    if products.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Inventory is empty.")));
    }
    Ok(CmdResult::default().with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, remove};
    use crate::store::memory::fixtures::{name, product, seeded_store};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fresh_store_lists_seed() {
        let result = run(&seeded_store()).unwrap();
        assert_eq!(result.listed_products, vec![product("suits", 30, 12000.0)]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_says_so() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("Inventory is empty.")]);
    }

    #[test]
    fn emptied_store_says_so() {
        let mut store = seeded_store();
        remove::run(&mut store, &name("suits")).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.messages[0].content, "Inventory is empty.");
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut store = seeded_store();
        add::run(&mut store, name("ties"), 4, 150.0).unwrap();
        add::run(&mut store, name("belts"), 2, 300.0).unwrap();

        let names: Vec<String> = run(&store)
            .unwrap()
            .listed_products
            .iter()
            .map(|p| p.name.to_string())
            .collect();
        assert_eq!(names, vec!["suits", "ties", "belts"]);
    }
}
