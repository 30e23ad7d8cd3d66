//! The interactive front end: argument parsing, logging setup, the menu loop and printing.
//! Not part of the library API.

mod menu;
mod print;
mod prompt;
mod setup;
mod styles;

use clap::Parser;
use print::Printer;
use std::io;
use stocktake::api::InventoryApi;
use stocktake::error::Result;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = setup::Cli::parse();
    let config = setup::load_config(&cli)?;
    setup::init_logging(&config.log_level, cli.verbose);

    let seed = config.seed_products();
    info!(products = seed.len(), "starting inventory session");
    let mut api = InventoryApi::in_memory(seed);

    let printer = Printer::new(config.currency.as_str(), console::colors_enabled());
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut api, &mut stdin.lock(), &mut stdout.lock(), &printer)
}
