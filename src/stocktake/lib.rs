//! # Stocktake Architecture
//!
//! Stocktake is a tiny inventory tracker: a mapping from product name to quantity and price,
//! driven from an interactive text menu. The menu is only one client of the library; everything
//! below it is plain Rust that can be exercised without a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts with retry, printing                  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / view / list / update / remove                      │
//! │  - Outcomes are messages in a CmdResult, never errors       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input validation
//!
//! [`validate`] holds single-shot parsers for product names, quantities and prices. They return
//! a `Result` and never loop; the "ask again until it is right" behaviour lives in the CLI
//! prompts, layered on top.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each inventory operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Product` and `ProductName`
//! - [`validate`]: Input parsers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
