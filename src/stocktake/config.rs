use crate::error::{Result, StocktakeError};
use crate::model::Product;
use crate::validate::parse_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "KSh";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// A product the inventory starts with. Names are normalized on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedProduct {
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

/// Configuration for stocktake, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StocktakeConfig {
    /// Label printed in front of prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Products present when the program starts
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedProduct>,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_seed() -> Vec<SeedProduct> {
    vec![SeedProduct {
        name: "suits".to_string(),
        quantity: 30,
        price: 12000.0,
    }]
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for StocktakeConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            seed: default_seed(),
            log_level: default_log_level(),
        }
    }
}

impl StocktakeConfig {
    /// Load config from a file, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: StocktakeConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.json` from a directory, or return defaults if absent
    pub fn load_from_dir<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .seed
            .iter()
            .find(|s| !s.price.is_finite() || s.price < 0.0)
        {
            return Err(StocktakeError::Config(format!(
                "seed product '{}' has an invalid price: {}",
                bad.name, bad.price
            )));
        }
        Ok(())
    }

    /// Seed products with normalized names, in file order. Entries whose name would be
    /// rejected at the prompt are skipped.
    pub fn seed_products(&self) -> Vec<Product> {
        self.seed
            .iter()
            .filter_map(|seed| match parse_name(&seed.name) {
                Ok(name) => Some(Product::new(name, seed.quantity, seed.price)),
                Err(e) => {
                    warn!(name = %seed.name, reason = %e, "skipping seed product");
                    None
                }
            })
            .collect()
    }
}
