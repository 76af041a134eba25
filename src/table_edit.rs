//! Table Edit State
//!
//! Row and bulk edit buffers plus the selection set for the inventory table.
//! Pure state: the table component owns one of these in a signal and performs
//! the network calls that saves and deletes produce.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog;
use crate::models::{Item, ItemId, Listing};
use crate::validation::{self, FieldError};

/// Columns that can be edited inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditField {
    TicketType,
    Quantity,
    Category,
    SectionBlock,
    Row,
    Seating,
    FaceValue,
    PayoutPrice,
    ShipDate,
}

impl EditField {
    pub const ALL: [EditField; 9] = [
        EditField::TicketType,
        EditField::Quantity,
        EditField::Category,
        EditField::SectionBlock,
        EditField::Row,
        EditField::Seating,
        EditField::FaceValue,
        EditField::PayoutPrice,
        EditField::ShipDate,
    ];

    /// Wire name, also used to key field errors
    pub fn key(&self) -> &'static str {
        match self {
            EditField::TicketType => "ticketType",
            EditField::Quantity => "quantity",
            EditField::Category => "category",
            EditField::SectionBlock => "sectionBlock",
            EditField::Row => "row",
            EditField::Seating => "seating",
            EditField::FaceValue => "faceValue",
            EditField::PayoutPrice => "payoutPrice",
            EditField::ShipDate => "eventDate",
        }
    }

    /// Column header
    pub fn label(&self) -> &'static str {
        match self {
            EditField::TicketType => "Ticket Type",
            EditField::Quantity => "Quantity",
            EditField::Category => "Category",
            EditField::SectionBlock => "Section/Block",
            EditField::Row => "Row",
            EditField::Seating => "First Seat",
            EditField::FaceValue => "Face Value",
            EditField::PayoutPrice => "Payout Price",
            EditField::ShipDate => "Ship Date",
        }
    }

    /// Choices for columns edited with a select; `None` means free text
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            EditField::TicketType => Some(catalog::TICKET_TYPES),
            EditField::Quantity => Some(catalog::TABLE_QUANTITIES),
            EditField::Category => Some(catalog::CATEGORIES),
            EditField::SectionBlock => Some(catalog::SECTION_BLOCKS),
            _ => None,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            EditField::ShipDate => "date",
            _ => "text",
        }
    }

    /// Current value as display text
    pub fn read(&self, listing: &Listing) -> String {
        match self {
            EditField::TicketType => listing.ticket_type.map(|t| t.to_string()).unwrap_or_default(),
            EditField::Quantity => listing.quantity.to_string(),
            EditField::Category => listing.category.clone(),
            EditField::SectionBlock => listing.section_block.clone(),
            EditField::Row => listing.row.clone(),
            EditField::Seating => listing.seating.clone(),
            EditField::FaceValue => listing.face_value.to_string(),
            EditField::PayoutPrice => listing.payout_price.to_string(),
            EditField::ShipDate => listing.event_date.clone(),
        }
    }

    fn write(&self, listing: &mut Listing, raw: &str) -> Result<(), FieldError> {
        let key = self.key();
        match self {
            EditField::TicketType => listing.ticket_type = Some(validation::parse_ticket_type(key, raw)?),
            EditField::Quantity => listing.quantity = validation::parse_quantity(key, raw)?,
            EditField::Category => listing.category = raw.to_string(),
            EditField::SectionBlock => listing.section_block = raw.to_string(),
            EditField::Row => listing.row = raw.to_string(),
            EditField::Seating => listing.seating = raw.to_string(),
            EditField::FaceValue => listing.face_value = validation::parse_price(key, raw)?,
            EditField::PayoutPrice => listing.payout_price = validation::parse_price(key, raw)?,
            EditField::ShipDate => {
                listing.event_date = if raw.trim().is_empty() {
                    String::new()
                } else {
                    validation::parse_ship_date(key, raw)?
                }
            }
        }
        Ok(())
    }
}

/// Uncommitted raw input for one row, keyed by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer {
    values: BTreeMap<EditField, String>,
}

impl EditBuffer {
    /// Buffer pre-filled with the item's current values
    pub fn snapshot(item: &Item) -> Self {
        let values = EditField::ALL
            .iter()
            .map(|f| (*f, f.read(&item.listing)))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, field: EditField, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }

    pub fn get(&self, field: EditField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Buffered text, falling back to the item's value
    pub fn value_or(&self, field: EditField, item: &Item) -> String {
        self.get(field)
            .map(str::to_string)
            .unwrap_or_else(|| field.read(&item.listing))
    }

    /// Merge the buffer onto `item`, parsing every buffered value
    pub fn apply(&self, item: &Item) -> Result<Item, Vec<FieldError>> {
        let mut merged = item.clone();
        let errors: Vec<FieldError> = self
            .values
            .iter()
            .filter_map(|(field, raw)| field.write(&mut merged.listing, raw).err())
            .collect();
        if errors.is_empty() { Ok(merged) } else { Err(errors) }
    }
}

/// Table-wide edit mode
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditMode {
    #[default]
    Viewing,
    Row { item_id: ItemId, buffer: EditBuffer },
    Bulk { buffers: BTreeMap<ItemId, EditBuffer> },
}

/// What a single row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    RowEditing,
    BulkEditing,
}

/// Result of asking to save the row being edited
#[derive(Debug, Clone, PartialEq)]
pub enum RowSave {
    /// Merged record to send to the server; the row is back to viewing
    Ready(Item),
    /// Buffer did not parse; the row stays in edit mode
    Invalid(Vec<FieldError>),
    /// That row was not being edited
    NotEditing,
}

/// Result of asking to save a bulk edit
#[derive(Debug, Clone, PartialEq)]
pub enum BulkSave {
    /// Rows in `ready` are merged and leave the edit. Rows in `invalid` stay
    /// selected and in bulk mode with their buffers; bulk mode ends only when
    /// `invalid` is empty.
    Commit {
        ready: Vec<Item>,
        invalid: BTreeMap<ItemId, Vec<FieldError>>,
    },
    NotEditing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableEditState {
    mode: EditMode,
    selected: BTreeSet<ItemId>,
    errors: BTreeMap<ItemId, Vec<FieldError>>,
}

impl TableEditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_bulk_editing(&self) -> bool {
        matches!(self.mode, EditMode::Bulk { .. })
    }

    pub fn row_state(&self, item_id: ItemId) -> RowState {
        match &self.mode {
            EditMode::Viewing => RowState::Viewing,
            EditMode::Row { item_id: editing, .. } if *editing == item_id => RowState::RowEditing,
            EditMode::Row { .. } => RowState::Viewing,
            EditMode::Bulk { .. } => RowState::BulkEditing,
        }
    }

    /// Text an edit input shows for this row and column
    pub fn field_value(&self, item: &Item, field: EditField) -> String {
        match &self.mode {
            EditMode::Row { item_id, buffer } if *item_id == item.id => buffer.value_or(field, item),
            EditMode::Bulk { buffers } => match buffers.get(&item.id) {
                Some(buffer) => buffer.value_or(field, item),
                None => field.read(&item.listing),
            },
            _ => field.read(&item.listing),
        }
    }

    pub fn field_error(&self, item_id: ItemId, field: EditField) -> Option<String> {
        self.errors
            .get(&item_id)
            .and_then(|errs| validation::message_for(errs, field.key()))
            .map(str::to_string)
    }

    // ========================
    // Row editing
    // ========================

    /// Snapshot `item` into a fresh buffer. Ignored while bulk editing.
    pub fn start_row_edit(&mut self, item: &Item) -> bool {
        if self.is_bulk_editing() {
            return false;
        }
        log::debug!("[TABLE] start row edit #{}", item.id);
        self.errors.clear();
        self.mode = EditMode::Row { item_id: item.id, buffer: EditBuffer::snapshot(item) };
        true
    }

    /// Record a keystroke. Returns false when that row is not editable.
    pub fn edit_field(&mut self, item_id: ItemId, field: EditField, raw: impl Into<String>) -> bool {
        match &mut self.mode {
            EditMode::Row { item_id: editing, buffer } if *editing == item_id => buffer.set(field, raw),
            EditMode::Bulk { buffers } => buffers.entry(item_id).or_default().set(field, raw),
            _ => return false,
        }
        true
    }

    pub fn save_row_edit(&mut self, item: &Item) -> RowSave {
        let buffer = match &self.mode {
            EditMode::Row { item_id, buffer } if *item_id == item.id => buffer,
            _ => return RowSave::NotEditing,
        };
        match buffer.apply(item) {
            Ok(merged) => {
                self.mode = EditMode::Viewing;
                self.errors.remove(&item.id);
                RowSave::Ready(merged)
            }
            Err(errs) => {
                log::warn!("[TABLE] row #{} has {} invalid field(s)", item.id, errs.len());
                self.errors.insert(item.id, errs.clone());
                RowSave::Invalid(errs)
            }
        }
    }

    pub fn cancel_row_edit(&mut self, item_id: ItemId) {
        if self.row_state(item_id) == RowState::RowEditing {
            self.mode = EditMode::Viewing;
            self.errors.remove(&item_id);
        }
    }

    // ========================
    // Selection
    // ========================

    pub fn is_selected(&self, item_id: ItemId) -> bool {
        self.selected.contains(&item_id)
    }

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.selected.iter().copied().collect()
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_select(&mut self, item_id: ItemId) {
        if !self.selected.remove(&item_id) {
            self.selected.insert(item_id);
        }
    }

    pub fn select_all(&mut self, items: &[Item]) {
        self.selected = items.iter().map(|i| i.id).collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// True when every id is selected (and there is at least one)
    pub fn all_selected(&self, ids: &[ItemId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Select or deselect a whole event group
    pub fn set_selected(&mut self, ids: &[ItemId], selected: bool) {
        for id in ids {
            if selected {
                self.selected.insert(*id);
            } else {
                self.selected.remove(id);
            }
        }
    }

    /// Clear the selection and hand back what was selected
    pub fn take_selection(&mut self) -> Vec<ItemId> {
        std::mem::take(&mut self.selected).into_iter().collect()
    }

    /// Forget ids that are no longer in the collection (after a refetch)
    pub fn retain_existing(&mut self, items: &[Item]) {
        let live: BTreeSet<ItemId> = items.iter().map(|i| i.id).collect();
        self.selected.retain(|id| live.contains(id));
        self.errors.retain(|id, _| live.contains(id));
        if let EditMode::Row { item_id, .. } = &self.mode {
            if !live.contains(item_id) {
                self.mode = EditMode::Viewing;
            }
        }
    }

    // ========================
    // Bulk editing
    // ========================

    /// Every row becomes editable; a row edit in progress is dropped
    pub fn start_bulk_edit(&mut self) {
        log::debug!("[TABLE] start bulk edit, {} selected", self.selected.len());
        self.errors.clear();
        self.mode = EditMode::Bulk { buffers: BTreeMap::new() };
    }

    /// Merge buffers of selected rows. Rows edited but not selected are ignored.
    ///
    /// Each row stands alone: parsable rows are committed even when others
    /// in the selection are not.
    pub fn save_bulk_edit(&mut self, items: &[Item]) -> BulkSave {
        let EditMode::Bulk { buffers } = &mut self.mode else {
            return BulkSave::NotEditing;
        };

        let mut ready = Vec::new();
        let mut invalid = BTreeMap::new();
        let mut kept = BTreeMap::new();
        for id in &self.selected {
            let Some(buffer) = buffers.remove(id).filter(|b| !b.is_empty()) else {
                continue;
            };
            let Some(item) = items.iter().find(|i| i.id == *id) else {
                continue;
            };
            match buffer.apply(item) {
                Ok(merged) => ready.push(merged),
                Err(errs) => {
                    invalid.insert(*id, errs);
                    kept.insert(*id, buffer);
                }
            }
        }

        if invalid.is_empty() {
            self.mode = EditMode::Viewing;
            self.selected.clear();
        } else {
            log::warn!(
                "[TABLE] bulk save: {} row(s) ready, {} invalid kept in edit",
                ready.len(),
                invalid.len()
            );
            *buffers = kept;
            self.selected = invalid.keys().copied().collect();
        }
        self.errors = invalid.clone();
        BulkSave::Commit { ready, invalid }
    }

    /// Drop all buffers; the selection survives
    pub fn cancel_bulk_edit(&mut self) {
        if self.is_bulk_editing() {
            self.mode = EditMode::Viewing;
            self.errors.clear();
        }
    }
}

/// Local copy of `source` under a fresh synthetic id.
///
/// The id is the clock in epoch milliseconds, moved past the largest
/// existing id when needed so it never collides with the collection.
pub fn clone_item(source: &Item, existing: &[Item], now_millis: u64) -> Item {
    let next_free = existing.iter().map(|i| i.id).max().map_or(0, |max| max + 1);
    Item::new(now_millis.max(next_free), source.listing.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketType;

    fn make_item(id: u64, quantity: u32, face_value: f64) -> Item {
        Item::new(
            id,
            Listing {
                event_id: Some("event1".to_string()),
                event_name: "Concert A".to_string(),
                ticket_type: Some(TicketType::ETicket),
                quantity,
                category: "Away Fans Section".to_string(),
                face_value,
                payout_price: 80.0,
                event_date: "2025-07-10".to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_field_widgets() {
        assert_eq!(EditField::Quantity.options(), Some(catalog::TABLE_QUANTITIES));
        assert!(EditField::Row.options().is_none());
        assert_eq!(EditField::ShipDate.input_type(), "date");
        assert_eq!(EditField::ShipDate.key(), "eventDate");
    }

    #[test]
    fn test_start_and_cancel_leaves_item_unchanged() {
        let item = make_item(1, 2, 50.0);
        let before = item.clone();
        let mut state = TableEditState::new();

        assert!(state.start_row_edit(&item));
        assert_eq!(state.row_state(1), RowState::RowEditing);
        state.edit_field(1, EditField::Quantity, "9");
        state.cancel_row_edit(1);

        assert_eq!(state.row_state(1), RowState::Viewing);
        assert_eq!(state.mode(), &EditMode::Viewing);
        assert_eq!(item, before);
        assert_eq!(state.field_value(&item, EditField::Quantity), "2");
    }

    #[test]
    fn test_save_merges_buffer() {
        let item = make_item(1, 2, 50.0);
        let mut state = TableEditState::new();
        state.start_row_edit(&item);
        state.edit_field(1, EditField::Quantity, "5");

        let RowSave::Ready(merged) = state.save_row_edit(&item) else {
            panic!("expected a merged item");
        };
        assert_eq!(merged.id, 1);
        assert_eq!(merged.listing.quantity, 5);
        assert_eq!(merged.listing.face_value, 50.0);
        assert_eq!(merged.listing.category, item.listing.category);
        assert_eq!(state.row_state(1), RowState::Viewing);
    }

    #[test]
    fn test_partial_buffer_apply() {
        let item = make_item(1, 2, 50.0);
        let mut buffer = EditBuffer::default();
        buffer.set(EditField::Quantity, "5");

        let merged = buffer.apply(&item).unwrap();
        let mut expected = item.clone();
        expected.listing.quantity = 5;
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_unparsable_price_blocks_save() {
        let item = make_item(1, 2, 50.0);
        let mut state = TableEditState::new();
        state.start_row_edit(&item);
        state.edit_field(1, EditField::FaceValue, "4x");

        let RowSave::Invalid(errs) = state.save_row_edit(&item) else {
            panic!("expected a validation failure");
        };
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "faceValue");
        assert_eq!(state.row_state(1), RowState::RowEditing);
        assert!(state.field_error(1, EditField::FaceValue).is_some());
        // Raw text is kept so the operator can fix it
        assert_eq!(state.field_value(&item, EditField::FaceValue), "4x");

        state.edit_field(1, EditField::FaceValue, "45.5");
        let RowSave::Ready(merged) = state.save_row_edit(&item) else {
            panic!("expected a merged item");
        };
        assert_eq!(merged.listing.face_value, 45.5);
        assert!(state.field_error(1, EditField::FaceValue).is_none());
    }

    #[test]
    fn test_save_other_row_is_not_editing() {
        let a = make_item(1, 2, 50.0);
        let b = make_item(2, 2, 50.0);
        let mut state = TableEditState::new();
        state.start_row_edit(&a);

        assert_eq!(state.save_row_edit(&b), RowSave::NotEditing);
        assert!(!state.edit_field(2, EditField::Row, "K"));
        assert_eq!(state.row_state(1), RowState::RowEditing);
    }

    #[test]
    fn test_selection() {
        let items: Vec<Item> = (1..=4).map(|id| make_item(id, 1, 10.0)).collect();
        let mut state = TableEditState::new();

        state.toggle_select(2);
        state.toggle_select(3);
        state.toggle_select(2);
        assert_eq!(state.selected_ids(), vec![3]);

        state.select_all(&items);
        assert_eq!(state.selected_ids(), vec![1, 2, 3, 4]);

        state.deselect_all();
        assert!(state.selected_ids().is_empty());
    }

    #[test]
    fn test_group_selection() {
        let mut state = TableEditState::new();
        state.toggle_select(9);

        state.set_selected(&[1, 2], true);
        assert!(state.all_selected(&[1, 2]));
        assert!(!state.all_selected(&[1, 2, 3]));
        assert!(!state.all_selected(&[]));

        state.set_selected(&[1, 2], false);
        assert_eq!(state.selected_ids(), vec![9]);
    }

    #[test]
    fn test_selection_independent_of_edit() {
        let item = make_item(1, 2, 50.0);
        let mut state = TableEditState::new();
        state.toggle_select(1);
        state.start_row_edit(&item);
        state.cancel_row_edit(1);
        assert!(state.is_selected(1));
    }

    #[test]
    fn test_retain_existing() {
        let items: Vec<Item> = (1..=3).map(|id| make_item(id, 1, 10.0)).collect();
        let mut state = TableEditState::new();
        state.select_all(&items);
        state.start_row_edit(&items[2]);

        state.retain_existing(&items[..2]);
        assert_eq!(state.selected_ids(), vec![1, 2]);
        assert_eq!(state.mode(), &EditMode::Viewing);
    }

    #[test]
    fn test_bulk_edit_suspends_row_edit() {
        let item = make_item(1, 2, 50.0);
        let mut state = TableEditState::new();
        state.start_row_edit(&item);
        state.start_bulk_edit();

        assert_eq!(state.row_state(1), RowState::BulkEditing);
        assert_eq!(state.row_state(99), RowState::BulkEditing);
        assert!(!state.start_row_edit(&item));
    }

    #[test]
    fn test_bulk_save_only_selected_with_changes() {
        let items: Vec<Item> = (1..=4).map(|id| make_item(id, 1, 10.0)).collect();
        let mut state = TableEditState::new();
        state.toggle_select(1);
        state.toggle_select(2);
        state.toggle_select(3);
        state.start_bulk_edit();

        state.edit_field(1, EditField::Row, "A");
        state.edit_field(3, EditField::Quantity, "3");
        // Edited but not selected
        state.edit_field(4, EditField::Row, "Z");

        let BulkSave::Commit { ready: updates, invalid } = state.save_bulk_edit(&items) else {
            panic!("expected updates");
        };
        assert!(invalid.is_empty());
        let ids: Vec<u64> = updates.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(updates[0].listing.row, "A");
        assert_eq!(updates[1].listing.quantity, 3);

        assert!(!state.is_bulk_editing());
        assert!(state.selected_ids().is_empty());
    }

    #[test]
    fn test_bulk_save_commits_valid_rows_and_keeps_invalid() {
        let items: Vec<Item> = (1..=3).map(|id| make_item(id, 1, 10.0)).collect();
        let mut state = TableEditState::new();
        state.select_all(&items);
        state.start_bulk_edit();
        state.edit_field(1, EditField::PayoutPrice, "12");
        state.edit_field(2, EditField::PayoutPrice, "twelve");
        state.edit_field(3, EditField::Row, "C");

        let BulkSave::Commit { ready, invalid } = state.save_bulk_edit(&items) else {
            panic!("expected a commit");
        };
        let ready_ids: Vec<u64> = ready.iter().map(|i| i.id).collect();
        assert_eq!(ready_ids, vec![1, 3]);
        assert_eq!(ready[0].listing.payout_price, 12.0);
        assert_eq!(invalid.keys().copied().collect::<Vec<_>>(), vec![2]);

        // Only the bad row is left to fix
        assert!(state.is_bulk_editing());
        assert_eq!(state.selected_ids(), vec![2]);
        assert!(state.field_error(2, EditField::PayoutPrice).is_some());
        assert_eq!(state.field_value(&items[1], EditField::PayoutPrice), "twelve");
        assert_eq!(state.field_value(&items[0], EditField::PayoutPrice), "80");

        state.edit_field(2, EditField::PayoutPrice, "15");
        let BulkSave::Commit { ready, invalid } = state.save_bulk_edit(&items) else {
            panic!("expected a commit");
        };
        assert_eq!(ready.len(), 1);
        assert!(invalid.is_empty());
        assert!(!state.is_bulk_editing());
        assert!(state.selected_ids().is_empty());
        assert!(state.field_error(2, EditField::PayoutPrice).is_none());
    }

    #[test]
    fn test_select_all_spans_every_event() {
        let mut items: Vec<Item> = (1..=3).map(|id| make_item(id, 1, 10.0)).collect();
        items[1].listing.event_id = Some("event2".to_string());
        let mut state = TableEditState::new();

        // The table shows event1 only; select all still covers event2
        let shown = crate::grouping::visible_groups(&items, "event1");
        assert_eq!(shown[0].items.len(), 2);
        state.select_all(&items);
        assert_eq!(state.selected_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_bulk_keeps_selection() {
        let items: Vec<Item> = (1..=2).map(|id| make_item(id, 1, 10.0)).collect();
        let mut state = TableEditState::new();
        state.select_all(&items);
        state.start_bulk_edit();
        state.edit_field(1, EditField::Row, "B");
        state.cancel_bulk_edit();

        assert_eq!(state.mode(), &EditMode::Viewing);
        assert_eq!(state.selected_ids(), vec![1, 2]);
        assert_eq!(state.field_value(&items[0], EditField::Row), "");
        assert_eq!(state.save_bulk_edit(&items), BulkSave::NotEditing);
    }

    #[test]
    fn test_take_selection() {
        let mut state = TableEditState::new();
        state.toggle_select(5);
        state.toggle_select(3);
        assert_eq!(state.take_selection(), vec![3, 5]);
        assert_eq!(state.selection_len(), 0);
    }

    #[test]
    fn test_clone_item() {
        let items: Vec<Item> = vec![make_item(7, 2, 50.0), make_item(8, 1, 20.0)];
        let clone = clone_item(&items[0], &items, 1_750_000_000_000);

        assert_ne!(clone.id, 7);
        assert_eq!(clone.id, 1_750_000_000_000);
        assert_eq!(clone.listing, items[0].listing);
    }

    #[test]
    fn test_clone_id_never_collides() {
        let items = vec![make_item(500, 1, 1.0)];
        let first = clone_item(&items[0], &items, 100);
        assert_eq!(first.id, 501);

        let mut grown = items.clone();
        grown.push(first.clone());
        let second = clone_item(&items[0], &grown, 100);
        assert_eq!(second.id, 502);
    }
}
