//! The menu loop.
//!
//! ```text
//!   Prompt ──"1".."5"──▶ Dispatch ──▶ Prompt
//!     │  ▲                  │
//!     └──┘ anything else    └──"6"──▶ Exit
//! ```
//!
//! Every outcome of a dispatched operation, including "not found", is printed and the loop
//! goes back to Prompt. Only choice 6 or closing stdin ends the session.

use super::print::Printer;
use super::prompt;
use std::io::{BufRead, Write};
use stocktake::api::InventoryApi;
use stocktake::error::{Result, StocktakeError};
use stocktake::store::DataStore;
use tracing::{debug, trace};

const CHOICE_PROMPT: &str = "Choose an option (1-6): ";
const INVALID_OPTION: &str = "Invalid option. Please choose between 1 and 6.";
const EXIT_MESSAGE: &str = "Exiting program...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    ViewAll,
    UpdateQuantity,
    Remove,
    Exit,
}

impl MenuChoice {
    /// Exact match only: " 1" or "1 " is not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::ViewAll),
            "4" => Some(MenuChoice::UpdateQuantity),
            "5" => Some(MenuChoice::Remove),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prompt,
    Dispatch(MenuChoice),
    Exit,
}

/// Runs the menu until the user exits or input runs out.
pub fn run<S, R, W>(
    api: &mut InventoryApi<S>,
    input: &mut R,
    out: &mut W,
    printer: &Printer,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    match drive(api, input, out, printer) {
        Err(StocktakeError::InputClosed) => {
            debug!("input closed, ending session");
            out.flush()?;
            Ok(())
        }
        other => other,
    }
}

fn drive<S, R, W>(
    api: &mut InventoryApi<S>,
    input: &mut R,
    out: &mut W,
    printer: &Printer,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut state = State::Prompt;
    loop {
        state = match state {
            State::Prompt => {
                printer.menu(out)?;
                let line = prompt::read_line(input, out, CHOICE_PROMPT)?;
                match MenuChoice::parse(&line) {
                    Some(choice) => State::Dispatch(choice),
                    None => {
                        trace!(input = %line, "invalid menu choice");
                        printer.line(out, INVALID_OPTION)?;
                        State::Prompt
                    }
                }
            }
            State::Dispatch(choice) => dispatch(api, input, out, printer, choice)?,
            State::Exit => {
                out.flush()?;
                return Ok(());
            }
        };
    }
}

fn dispatch<S, R, W>(
    api: &mut InventoryApi<S>,
    input: &mut R,
    out: &mut W,
    printer: &Printer,
    choice: MenuChoice,
) -> Result<State>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    trace!(?choice, "dispatching");
    let result = match choice {
        MenuChoice::Add => {
            let name = prompt::name(input, out, printer)?;
            let quantity = prompt::quantity(input, out, printer, prompt::QUANTITY_PROMPT)?;
            let price = prompt::price(input, out, printer)?;
            api.add_product(name, quantity, price)?
        }
        MenuChoice::View => {
            let name = prompt::name(input, out, printer)?;
            api.view_product(&name)?
        }
        MenuChoice::ViewAll => api.list_products()?,
        MenuChoice::UpdateQuantity => {
            let name = prompt::name(input, out, printer)?;
            let quantity = prompt::quantity(input, out, printer, prompt::NEW_QUANTITY_PROMPT)?;
            api.update_quantity(&name, quantity)?
        }
        MenuChoice::Remove => {
            let name = prompt::name(input, out, printer)?;
            api.remove_product(&name)?
        }
        MenuChoice::Exit => {
            printer.line(out, EXIT_MESSAGE)?;
            return Ok(State::Exit);
        }
    };

    printer.result(out, &result)?;
    Ok(State::Prompt)
}
