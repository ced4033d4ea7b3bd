//! UI Components
//!
//! Leptos components for the diary page.

mod diary_header;
mod entry_form;
mod item_rows;
mod entry_list;
mod entry_card;

pub use diary_header::DiaryHeader;
pub use entry_form::EntryFormPanel;
pub use item_rows::ItemRows;
pub use entry_list::EntryList;
pub use entry_card::EntryCard;
