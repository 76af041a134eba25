//! Listing Form
//!
//! Raw form input for a new listing and its conversion into the record
//! sent to `POST /inventory`.

use crate::catalog::{find_event, EventInfo};
use crate::models::Listing;
use crate::validation::{self, FieldError};

/// Form fields as typed, before any coercion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub event_id: String,
    pub ticket_type: String,
    pub quantity: String,
    pub split_type: String,
    pub seating_arrangement: String,
    pub max_display_qty: String,
    pub fan_area: String,
    pub category: String,
    pub section_block: String,
    pub row: String,
    pub seating: String,
    pub face_value: String,
    pub payout_price: String,
    pub benefits: String,
    pub restrictions: String,
    pub ship_date: String,
    pub tickets_in_hand: bool,
    /// Chosen ticket file, as the file input reports it
    pub upload: Option<String>,
}

impl ListingDraft {
    /// Presence check on required fields, with per-field messages
    pub fn missing_fields(&self) -> Vec<FieldError> {
        let required = [
            ("eventId", &self.event_id, "Event is required"),
            ("ticketType", &self.ticket_type, "Ticket type is required"),
            ("quantity", &self.quantity, "Quantity is required"),
            ("seatingArrangement", &self.seating_arrangement, "Seating arrangement is required"),
            ("category", &self.category, "Category is required"),
            ("payoutPrice", &self.payout_price, "Payout price is required"),
            ("eventDate", &self.ship_date, "Ship date is required"),
        ];
        required
            .into_iter()
            .filter(|(_, value, _)| value.trim().is_empty())
            .map(|(field, _, message)| FieldError::new(field, message))
            .collect()
    }

    /// Validate and assemble the record to create.
    ///
    /// Event name, day, time and venue come from the catalog entry; numeric
    /// fields are coerced; the upload is reduced to its file name.
    pub fn to_listing(&self, events: &[EventInfo]) -> Result<Listing, Vec<FieldError>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut errors = Vec::new();
        let event = keep(
            find_event(events, self.event_id.trim())
                .ok_or_else(|| FieldError::new("eventId", "Unknown event")),
            &mut errors,
        );
        let ticket_type = keep(validation::parse_ticket_type("ticketType", &self.ticket_type), &mut errors);
        let quantity = keep(validation::parse_quantity("quantity", &self.quantity), &mut errors);
        let max_display_qty = keep(
            validation::parse_optional_count("maxDisplayQty", &self.max_display_qty),
            &mut errors,
        );
        let face_value = keep(validation::parse_optional_price("faceValue", &self.face_value), &mut errors);
        let payout_price = keep(validation::parse_price("payoutPrice", &self.payout_price), &mut errors);
        let ship_date = keep(validation::parse_ship_date("eventDate", &self.ship_date), &mut errors);

        let (
            Some(event),
            Some(ticket_type),
            Some(quantity),
            Some(max_display_qty),
            Some(face_value),
            Some(payout_price),
            Some(ship_date),
        ) = (event, ticket_type, quantity, max_display_qty, face_value, payout_price, ship_date)
        else {
            return Err(errors);
        };

        Ok(Listing {
            event_id: Some(event.id.to_string()),
            event_name: event.name.to_string(),
            event_day: event.date.to_string(),
            event_time: event.time.to_string(),
            venue: event.venue.to_string(),
            ticket_type: Some(ticket_type),
            quantity,
            split_type: self.split_type.clone(),
            seating_arrangement: self.seating_arrangement.clone(),
            max_display_qty,
            fan_area: self.fan_area.clone(),
            category: self.category.clone(),
            section_block: self.section_block.clone(),
            row: self.row.clone(),
            seating: self.seating.clone(),
            face_value,
            payout_price,
            benefits: self.benefits.clone(),
            restrictions: self.restrictions.clone(),
            event_date: ship_date,
            tickets_in_hand: self.tickets_in_hand,
            upload_tickets: self.upload.as_deref().map(validation::file_name_of).unwrap_or_default(),
        })
    }
}

fn keep<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}
