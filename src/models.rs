//! Frontend Models
//!
//! Data structures matching the inventory API's JSON records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing id, assigned by the server (or locally for unsaved clones)
pub type ItemId = u64;

/// How the tickets reach the buyer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TicketType {
    #[default]
    #[serde(rename = "E-ticket")]
    ETicket,
    #[serde(rename = "Local Delivery")]
    LocalDelivery,
}

impl TicketType {
    pub const ALL: [TicketType; 2] = [TicketType::ETicket, TicketType::LocalDelivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::ETicket => "E-ticket",
            TicketType::LocalDelivery => "Local Delivery",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing body without its id (what `POST /inventory` sends).
///
/// Decoding never fails on a field's shape: nulls, blanks and wrongly typed
/// values fall back to the field's default so one odd record cannot break
/// the whole list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    #[serde(deserialize_with = "lenient::event_id", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub event_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub event_day: String,
    #[serde(deserialize_with = "lenient::text")]
    pub event_time: String,
    #[serde(deserialize_with = "lenient::text")]
    pub venue: String,
    /// `None` when the record has no (or an unknown) ticket type
    #[serde(deserialize_with = "lenient::ticket_type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<TicketType>,
    #[serde(deserialize_with = "lenient::count")]
    pub quantity: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub split_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub seating_arrangement: String,
    #[serde(deserialize_with = "lenient::count")]
    pub max_display_qty: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub fan_area: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::text")]
    pub section_block: String,
    #[serde(deserialize_with = "lenient::text")]
    pub row: String,
    /// First seat
    #[serde(deserialize_with = "lenient::text")]
    pub seating: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub face_value: f64,
    #[serde(deserialize_with = "lenient::amount")]
    pub payout_price: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub benefits: String,
    #[serde(deserialize_with = "lenient::text")]
    pub restrictions: String,
    /// Ship date, `YYYY-MM-DD`
    #[serde(deserialize_with = "lenient::text")]
    pub event_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub tickets_in_hand: bool,
    /// Uploaded ticket file name, empty when none
    #[serde(deserialize_with = "lenient::text")]
    pub upload_tickets: String,
}

/// One ticket listing as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub listing: Listing,
}

impl Item {
    pub fn new(id: ItemId, listing: Listing) -> Self {
        Self { id, listing }
    }

    pub fn event_id(&self) -> Option<&str> {
        self.listing.event_id.as_deref()
    }
}

/// Field decoders that map odd JSON shapes to defaults instead of errors
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::TicketType;

    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .filter(|v: &f64| v.is_finite())
    }

    /// Some backends send numeric event ids; keep them as strings
    pub fn event_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value)
            .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v as u32)
            .unwrap_or_default())
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value).unwrap_or_default())
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }

    pub fn ticket_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TicketType>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => {
                let parsed = TicketType::parse(s.trim());
                if parsed.is_none() && !s.trim().is_empty() {
                    log::warn!("[API] unknown ticket type {:?}, shown as unset", s);
                }
                parsed
            }
            _ => None,
        })
    }
}
