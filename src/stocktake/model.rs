use std::fmt;

/// A product name that has passed [`crate::validate::parse_name`]: trimmed, lowercased,
/// letters and spaces only. This is the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    // Only the validator builds names, so every key is already normalized.
    pub(crate) fn new_unchecked(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: ProductName,
    pub quantity: u64,
    /// Unit price. Never negative, never NaN or infinite.
    pub price: f64,
}

impl Product {
    pub fn new(name: ProductName, quantity: u64, price: f64) -> Self {
        Self {
            name,
            quantity,
            price,
        }
    }
}
