use console::Style;
use once_cell::sync::Lazy;

pub static MENU_TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold().cyan());
pub static LIST_HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static PRODUCT_NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
