//! # Commands
//!
//! One module per inventory operation. Each `run` function takes the store and already
//! validated arguments and returns a [`CmdResult`].
//!
//! Outcomes that the user needs to hear about, including "not found" and "already exists",
//! are [`CmdMessage`]s on the result, not `Err`s. `Err` is reserved for the store itself
//! failing, which the in-memory store never does.

use crate::model::Product;

pub mod add;
pub mod list;
pub mod remove;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created, changed or removed by the command
    pub affected_products: Vec<Product>,
    /// Products to show as a listing
    pub listed_products: Vec<Product>,
    /// A single product to show in detail
    pub viewed_product: Option<Product>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_viewed_product(mut self, product: Product) -> Self {
        self.viewed_product = Some(product);
        self
    }
}

pub(crate) fn not_found(name: &crate::model::ProductName) -> CmdMessage {
    CmdMessage::error(format!("Product '{}' not found.", name))
}
