//! Validation of the circle count typed into the text field

use crate::consts::{MAX_CIRCLES, MIN_CIRCLES};
use crate::error::InputError;

/// Parse a raw text value into a count within `[MIN_CIRCLES, MAX_CIRCLES]`
pub fn parse_count(raw: &str) -> Result<u32, InputError> {
    parse_count_in(raw, MIN_CIRCLES, MAX_CIRCLES)
}

/// Parse with an explicit inclusive range.
///
/// The range is checked before integrality, so "100.5" reports the range.
pub fn parse_count_in(raw: &str, min: u32, max: u32) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber)?;
    if value.is_nan() {
        return Err(InputError::NotANumber);
    }
    if value < f64::from(min) || value > f64::from(max) {
        return Err(InputError::OutOfRange { min, max });
    }
    if value.fract() != 0.0 {
        return Err(InputError::NotInteger);
    }

    Ok(value as u32)
}
