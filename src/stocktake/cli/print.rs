use super::styles;
use console::Style;
use std::io::Write;
use stocktake::api::{CmdMessage, CmdResult, MessageLevel};
use stocktake::model::Product;
use stocktake::validate::InputError;

const MENU_TITLE: &str = "====== INVENTORY MENU ======";
const MENU_ITEMS: [&str; 6] = [
    "1. Add Product",
    "2. View Product",
    "3. View All Products",
    "4. Update Quantity",
    "5. Remove Product",
    "6. Exit",
];
const LIST_HEADER: &str = "--- Inventory List ---";

/// Writes session output. Text is identical with or without color; styling only wraps it.
pub struct Printer {
    currency: String,
    color: bool,
}

impl Printer {
    pub fn new(currency: impl Into<String>, color: bool) -> Self {
        Self {
            currency: currency.into(),
            color,
        }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        style
            .clone()
            .force_styling(self.color)
            .apply_to(text)
            .to_string()
    }

    pub fn menu<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(&styles::MENU_TITLE, MENU_TITLE))?;
        for item in MENU_ITEMS {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }

    /// Prints whatever a command produced: the detailed product, the listing, then messages.
    pub fn result<W: Write>(&self, out: &mut W, result: &CmdResult) -> std::io::Result<()> {
        if let Some(product) = &result.viewed_product {
            self.product_details(out, product)?;
        }
        if !result.listed_products.is_empty() {
            self.product_list(out, &result.listed_products)?;
        }
        self.messages(out, &result.messages)
    }

    fn product_details<W: Write>(&self, out: &mut W, product: &Product) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "Product: {}",
            self.paint(&styles::PRODUCT_NAME, product.name.as_str())
        )?;
        writeln!(out, "Quantity: {}", product.quantity)?;
        writeln!(out, "Price: {}", self.price(product.price))
    }

    fn product_list<W: Write>(&self, out: &mut W, products: &[Product]) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(&styles::LIST_HEADER, LIST_HEADER))?;
        for product in products {
            writeln!(out, "{}", self.listing_line(product))?;
        }
        Ok(())
    }

    /// `<name> | Quantity: <int> | Price: <currency> <price to 2 places>`
    pub fn listing_line(&self, product: &Product) -> String {
        format!(
            "{} | Quantity: {} | Price: {}",
            product.name,
            product.quantity,
            self.price(product.price)
        )
    }

    fn price(&self, price: f64) -> String {
        format!("{} {:.2}", self.currency, price)
    }

    pub fn messages<W: Write>(&self, out: &mut W, messages: &[CmdMessage]) -> std::io::Result<()> {
        for message in messages {
            let style = match message.level {
                MessageLevel::Info => &*styles::INFO,
                MessageLevel::Success => &*styles::SUCCESS,
                MessageLevel::Warning => &*styles::WARNING,
                MessageLevel::Error => &*styles::ERROR,
            };
            writeln!(out, "{}", self.paint(style, &message.content))?;
        }
        Ok(())
    }

    pub fn input_error<W: Write>(&self, out: &mut W, error: &InputError) -> std::io::Result<()> {
        writeln!(out, "{}", self.paint(&styles::WARNING, &error.to_string()))
    }

    pub fn line<W: Write>(&self, out: &mut W, text: &str) -> std::io::Result<()> {
        writeln!(out, "{}", text)
    }
}
