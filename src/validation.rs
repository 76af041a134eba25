//! Field Validation
//!
//! Parsing of raw input text into listing values. Shared by the
//! listing form and the table edit buffers.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::TicketType;

/// A validation failure on one input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the field (`payoutPrice`, `eventDate`, ...)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// First message recorded for `field`, if any
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
}

pub fn parse_ticket_type(field: &'static str, raw: &str) -> Result<TicketType, FieldError> {
    TicketType::parse(raw.trim()).ok_or_else(|| FieldError::new(field, "Select a ticket type"))
}

/// Positive whole number
pub fn parse_quantity(field: &'static str, raw: &str) -> Result<u32, FieldError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FieldError::new(field, "Enter a whole number greater than 0")),
    }
}

/// Whole number where blank means 0
pub fn parse_optional_count(field: &'static str, raw: &str) -> Result<u32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| FieldError::new(field, "Enter a whole number"))
}

/// Non-negative decimal amount
pub fn parse_price(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(FieldError::new(field, "Amount cannot be negative")),
        Err(_) => Err(FieldError::new(field, "Enter a number, e.g. 49.99")),
    }
}

/// Non-negative decimal amount where blank means 0
pub fn parse_optional_price(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    parse_price(field, raw)
}

/// `YYYY-MM-DD` as produced by a date input; returned normalized
pub fn parse_ship_date(field: &'static str, raw: &str) -> Result<String, FieldError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| FieldError::new(field, "Enter a date as YYYY-MM-DD"))
}

/// Reduce a file input value (`C:\fakepath\x.pdf`) to its file name
pub fn file_name_of(path: &str) -> String {
    path.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}
