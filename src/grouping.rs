//! Event Grouping
//!
//! Partitions the flat listing collection into per-event groups for the table.

use std::collections::HashMap;

use crate::models::Item;

/// Group key for listings without an event id
pub const UNKNOWN_EVENT: &str = "unknown";

/// Listings that share an event, with the event's display metadata
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup {
    pub event_id: Option<String>,
    pub event_name: String,
    pub event_day: String,
    pub venue: String,
    pub event_time: String,
    pub items: Vec<Item>,
}

impl EventGroup {
    fn from_first(item: &Item) -> Self {
        let listing = &item.listing;
        Self {
            event_id: listing.event_id.clone(),
            event_name: listing.event_name.clone(),
            event_day: listing.event_day.clone(),
            venue: listing.venue.clone(),
            event_time: listing.event_time.clone(),
            items: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        self.event_id.as_deref().unwrap_or(UNKNOWN_EVENT)
    }

    pub fn display_name(&self) -> &str {
        or_placeholder(&self.event_name, "Event Name")
    }

    pub fn display_day(&self) -> &str {
        or_placeholder(&self.event_day, "Date")
    }

    pub fn display_time(&self) -> &str {
        or_placeholder(&self.event_time, "Time")
    }

    pub fn display_venue(&self) -> &str {
        or_placeholder(&self.venue, "Venue")
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Group items by event id.
///
/// Groups appear in the order their first item appears, and items keep their
/// relative order inside a group. Header metadata comes from the first item.
pub fn group_by_event(items: &[Item]) -> Vec<EventGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<EventGroup> = Vec::new();

    for item in items {
        let key = item.event_id().unwrap_or(UNKNOWN_EVENT);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(EventGroup::from_first(item));
            groups.len() - 1
        });
        groups[slot].items.push(item.clone());
    }

    groups
}

/// Groups belonging to the active event; empty when no event is active
pub fn visible_groups(items: &[Item], active_event_id: &str) -> Vec<EventGroup> {
    if active_event_id.is_empty() {
        return Vec::new();
    }
    group_by_event(items)
        .into_iter()
        .filter(|g| g.event_id.as_deref() == Some(active_event_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Listing;

    fn make_item(id: u64, event_id: Option<&str>) -> Item {
        Item::new(
            id,
            Listing {
                event_id: event_id.map(str::to_string),
                event_name: event_id.map(|e| format!("Name of {}", e)).unwrap_or_default(),
                quantity: 1,
                ..Default::default()
            },
        )
    }

    fn ids(group: &EventGroup) -> Vec<u64> {
        group.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_group_by_event() {
        let items = vec![
            make_item(1, Some("event2")),
            make_item(2, Some("event1")),
            make_item(3, Some("event2")),
            make_item(4, None),
            make_item(5, Some("event1")),
            make_item(6, None),
        ];

        let groups = group_by_event(&items);

        // First-seen order: event2, event1, unknown
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key(), "event2");
        assert_eq!(ids(&groups[0]), vec![1, 3]);
        assert_eq!(groups[0].event_name, "Name of event2");
        assert_eq!(groups[1].key(), "event1");
        assert_eq!(ids(&groups[1]), vec![2, 5]);
        assert_eq!(groups[2].key(), UNKNOWN_EVENT);
        assert_eq!(groups[2].event_id, None);
        assert_eq!(ids(&groups[2]), vec![4, 6]);
    }

    #[test]
    fn test_groups_cover_input_exactly() {
        let items: Vec<Item> = (1..=20)
            .map(|id| {
                let event = match id % 4 {
                    0 => None,
                    1 => Some("event1"),
                    2 => Some("event2"),
                    _ => Some("event3"),
                };
                make_item(id, event)
            })
            .collect();

        let groups = group_by_event(&items);

        let mut seen: Vec<u64> = groups.iter().flat_map(ids).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=20).collect::<Vec<_>>());

        for group in &groups {
            assert!(group.items.iter().all(|i| i.event_id() == group.event_id.as_deref()));
        }
        let mut keys: Vec<&str> = groups.iter().map(|g| g.key()).collect();
        keys.dedup();
        assert_eq!(keys.len(), groups.len());
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let items = vec![
            make_item(9, Some("event3")),
            make_item(2, None),
            make_item(7, Some("event3")),
        ];
        assert_eq!(group_by_event(&items), group_by_event(&items));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_event(&[]).is_empty());
    }

    #[test]
    fn test_placeholders() {
        let groups = group_by_event(&[make_item(1, None)]);
        let group = &groups[0];
        assert_eq!(group.display_name(), "Event Name");
        assert_eq!(group.display_day(), "Date");
        assert_eq!(group.display_time(), "Time");
        assert_eq!(group.display_venue(), "Venue");

        let groups = group_by_event(&[make_item(1, Some("event1"))]);
        assert_eq!(groups[0].display_name(), "Name of event1");
    }

    #[test]
    fn test_visible_groups() {
        let items = vec![
            make_item(1, Some("event1")),
            make_item(2, Some("event2")),
            make_item(3, Some("event1")),
            make_item(4, None),
        ];

        let visible = visible_groups(&items, "event1");
        assert_eq!(visible.len(), 1);
        assert_eq!(ids(&visible[0]), vec![1, 3]);

        assert!(visible_groups(&items, "").is_empty());
        assert!(visible_groups(&items, "event3").is_empty());
        // "unknown" is a grouping key, not a selectable event
        assert!(visible_groups(&items, UNKNOWN_EVENT).is_empty());
    }
}
