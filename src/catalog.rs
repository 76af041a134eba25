//! Event Catalog
//!
//! The events a listing can be attached to, and the option lists
//! offered by the form and table selects.

/// An event listings can be created for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
}

pub const EVENTS: &[EventInfo] = &[
    EventInfo {
        id: "event1",
        name: "Concert A",
        date: "2025-07-15",
        time: "7:00 PM",
        venue: "Stadium 1",
    },
    EventInfo {
        id: "event2",
        name: "Concert B",
        date: "2025-08-02",
        time: "3:00 PM",
        venue: "Arena 5",
    },
    EventInfo {
        id: "event3",
        name: "Premier League",
        date: "2025-08-02",
        time: "3:00 PM",
        venue: "Arena 5",
    },
];

pub fn find_event<'a>(events: &'a [EventInfo], id: &str) -> Option<&'a EventInfo> {
    events.iter().find(|e| e.id == id)
}

// Select options

pub const TICKET_TYPES: &[&str] = &["E-ticket", "Local Delivery"];
pub const FORM_QUANTITIES: &[&str] = &["1", "5", "10"];
pub const TABLE_QUANTITIES: &[&str] = &["1", "2", "3", "5", "10"];
pub const SPLIT_TYPES: &[&str] = &["None", "Any"];
pub const SEATING_ARRANGEMENTS: &[&str] = &["Seated together", "Not seated together"];
pub const MAX_DISPLAY_QUANTITIES: &[&str] = &["10", "20", "30"];
pub const FAN_AREAS: &[&str] = &["Any", "Home"];
pub const CATEGORIES: &[&str] = &["Away Fans Section", "Near Fans Section"];
pub const SECTION_BLOCKS: &[&str] = &["Longside lower tier", "Longside upper tier"];
pub const BENEFITS: &[&str] = &["Any", "None"];
pub const RESTRICTIONS: &[&str] = &["None"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_event() {
        let event = find_event(EVENTS, "event3").unwrap();
        assert_eq!(event.name, "Premier League");
        assert_eq!(event.venue, "Arena 5");
        assert!(find_event(EVENTS, "event9").is_none());
    }

    #[test]
    fn test_ticket_type_options_match_enum() {
        let names: Vec<&str> = crate::models::TicketType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, TICKET_TYPES);
    }

    #[test]
    fn test_event_ids_unique() {
        for (i, a) in EVENTS.iter().enumerate() {
            assert!(EVENTS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
