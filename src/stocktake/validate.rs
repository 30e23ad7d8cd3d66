//! Input parsing for product names, quantities and prices.
//!
//! Each parser takes one line of user input and either returns the parsed value or an
//! [`InputError`] whose `Display` text is the diagnostic shown to the user. None of them
//! loops; re-prompting is the caller's business.

use crate::model::ProductName;

/// Parses a product name.
///
/// # Rules
/// - Surrounding whitespace is trimmed; the result must not be empty
/// - With spaces removed, every character must have the Unicode `Alphabetic` property
/// - The result is lowercased; internal spacing is kept as typed
///
/// # Examples
/// ```
/// use stocktake::validate::parse_name;
///
/// assert_eq!(parse_name("  Blue Suit ").unwrap().as_str(), "blue suit");
/// assert!(parse_name("   ").is_err());
/// assert!(parse_name("suit2").is_err());
/// ```
pub fn parse_name(input: &str) -> Result<ProductName, InputError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }

    if !name.chars().filter(|c| *c != ' ').all(char::is_alphabetic) {
        return Err(InputError::InvalidName);
    }

    Ok(ProductName::new_unchecked(name.to_lowercase()))
}

/// Parses a non-negative base-10 integer.
///
/// A negative integer is `Negative` however many digits it has; a positive one too large
/// for `u64` is `NotAnInteger`.
pub fn parse_quantity(input: &str) -> Result<u64, InputError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotAnInteger);
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(InputError::Negative);
    }
    digits.parse().map_err(|_| InputError::NotAnInteger)
}

/// Parses a non-negative, finite real number. Exponent notation (`1e3`) is accepted.
pub fn parse_price(input: &str) -> Result<f64, InputError> {
    let value: f64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    // -0.0 compares equal to 0.0; store it as plain zero
    Ok(value.abs())
}

/// Why a line of input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Name is empty after trimming
    EmptyName,
    /// Name contains something other than letters and spaces
    InvalidName,
    /// Input is not an integer
    NotAnInteger,
    /// Input is not a number
    NotANumber,
    /// Number parsed but is below zero
    Negative,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::EmptyName => write!(f, "Product name cannot be empty."),
            InputError::InvalidName => {
                write!(f, "Product name should contain only letters and spaces.")
            }
            InputError::NotAnInteger => write!(f, "Please enter a valid integer."),
            InputError::NotANumber => write!(f, "Please enter a valid number."),
            InputError::Negative => write!(f, "Value cannot be negative."),
        }
    }
}

impl std::error::Error for InputError {}
