//! Interactive prompts. Each one asks until the input parses, printing the parser's
//! diagnostic after every rejected line. There is no retry limit; the only way out short of
//! valid input is closing stdin, which surfaces as `StocktakeError::InputClosed`.

use super::print::Printer;
use std::io::{BufRead, Write};
use stocktake::error::{Result, StocktakeError};
use stocktake::model::ProductName;
use stocktake::validate::{parse_name, parse_price, parse_quantity, InputError};
use tracing::trace;

pub const NAME_PROMPT: &str = "Enter product name: ";
pub const QUANTITY_PROMPT: &str = "Enter quantity: ";
pub const NEW_QUANTITY_PROMPT: &str = "Enter new quantity: ";
pub const PRICE_PROMPT: &str = "Enter price: ";

/// Writes `prompt` without a newline and reads one line, minus its line terminator.
/// Bytes that are not UTF-8 become U+FFFD, so they fail validation instead of the session.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(StocktakeError::InputClosed);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn ask<T, R, W>(
    input: &mut R,
    out: &mut W,
    printer: &Printer,
    prompt: &str,
    parse: fn(&str) -> std::result::Result<T, InputError>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_line(input, out, prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                trace!(input = %line, reason = ?e, "rejected input");
                printer.input_error(out, &e)?;
            }
        }
    }
}

pub fn name<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    printer: &Printer,
) -> Result<ProductName> {
    ask(input, out, printer, NAME_PROMPT, parse_name)
}

pub fn quantity<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    printer: &Printer,
    prompt: &str,
) -> Result<u64> {
    ask(input, out, printer, prompt, parse_quantity)
}

pub fn price<R: BufRead, W: Write>(input: &mut R, out: &mut W, printer: &Printer) -> Result<f64> {
    ask(input, out, printer, PRICE_PROMPT, parse_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn printer() -> Printer {
        Printer::new("KSh", false)
    }

    #[test]
    fn read_line_strips_terminator_only() {
        let mut input = Cursor::new("  1 \r\n");
        let mut out = Vec::new();
        let line = read_line(&mut input, &mut out, "> ").unwrap();
        assert_eq!(line, "  1 ");
        assert_eq!(out, b"> ");
    }

    #[test]
    fn read_line_accepts_last_line_without_newline() {
        let mut input = Cursor::new("6");
        let mut out = Vec::new();
        assert_eq!(read_line(&mut input, &mut out, "").unwrap(), "6");
    }

    #[test]
    fn read_line_reports_closed_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(matches!(
            read_line(&mut input, &mut out, ""),
            Err(StocktakeError::InputClosed)
        ));
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"\xff\xfe\n".to_vec());
        let mut out = Vec::new();
        assert_eq!(
            read_line(&mut input, &mut out, "").unwrap(),
            "\u{fffd}\u{fffd}"
        );
    }

    #[test]
    fn name_rejects_invalid_utf8_and_reprompts() {
        let mut input = Cursor::new(b"sh\xffoes\nshoes\n".to_vec());
        let mut out = Vec::new();

        let name = name(&mut input, &mut out, &printer()).unwrap();

        assert_eq!(name.as_str(), "shoes");
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Product name should contain only letters and spaces.\n"));
    }

    #[test]
    fn name_reprompts_until_valid() {
        let mut input = Cursor::new("\nhat5\n  Blue Suit\n");
        let mut out = Vec::new();

        let name = name(&mut input, &mut out, &printer()).unwrap();

        assert_eq!(name.as_str(), "blue suit");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter product name: Product name cannot be empty.\n\
             Enter product name: Product name should contain only letters and spaces.\n\
             Enter product name: "
        );
    }

    #[test]
    fn quantity_reprompts_on_negative_and_garbage() {
        let mut input = Cursor::new("-4\nfour\n4\n");
        let mut out = Vec::new();

        let qty = quantity(&mut input, &mut out, &printer(), QUANTITY_PROMPT).unwrap();

        assert_eq!(qty, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter quantity: Value cannot be negative.\n\
             Enter quantity: Please enter a valid integer.\n\
             Enter quantity: "
        );
    }

    #[test]
    fn price_reprompts_on_invalid_number() {
        let mut input = Cursor::new("abc\n-1\n999.5\n");
        let mut out = Vec::new();

        let value = price(&mut input, &mut out, &printer()).unwrap();

        assert_eq!(value, 999.5);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Please enter a valid number.\n"));
        assert!(text.contains("Value cannot be negative.\n"));
    }

    #[test]
    fn closed_input_ends_the_retry_loop() {
        let mut input = Cursor::new("123\n");
        let mut out = Vec::new();
        assert!(matches!(
            name(&mut input, &mut out, &printer()),
            Err(StocktakeError::InputClosed)
        ));
    }
}
