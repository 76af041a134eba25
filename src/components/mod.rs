//! UI Components
//!
//! Leptos components for the inventory screen.

mod bulk_action_bar;
mod delete_confirm_button;
mod event_group_table;
mod form_fields;
mod inventory_table;
mod listing_form;
mod listing_row;
mod nav_sidebar;
mod notice_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use inventory_table::InventoryTable;
pub use listing_form::ListingForm;
pub use nav_sidebar::NavSidebar;
pub use notice_banner::NoticeBanner;
