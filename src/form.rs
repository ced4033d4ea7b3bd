//! Entry Form State
//!
//! Title, content, notes, and the ordered activity item rows being edited.

use crate::error::ValidationError;
use crate::models::{EntryPayload, Item};

/// One item sub-form; `key` is stable for the row's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub key: u32,
    pub name: String,
    pub content: String,
}

impl ItemRow {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Exactly one of name/content filled in
    fn is_partial(&self) -> bool {
        let has_name = !self.name.trim().is_empty();
        let has_content = !self.content.trim().is_empty();
        has_name != has_content
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub content: String,
    pub notes: String,
    rows: Vec<ItemRow>,
    next_key: u32,
}

impl EntryForm {
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Append an empty item row, returning its key
    pub fn add_row(&mut self) -> u32 {
        self.push_row(String::new(), String::new())
    }

    pub fn remove_row(&mut self, key: u32) {
        self.rows.retain(|row| row.key != key);
    }

    pub fn set_row_name(&mut self, key: u32, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            row.name = value;
        }
    }

    pub fn set_row_content(&mut self, key: u32, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            row.content = value;
        }
    }

    /// Replace all rows with `items`, in order
    pub fn set_items(&mut self, items: &[Item]) {
        self.rows.clear();
        for item in items {
            self.push_row(item.item_name.clone(), item.item_content.clone());
        }
    }

    /// Fill every field from an existing entry
    pub fn fill(&mut self, title: &str, content: &str, notes: Option<&str>, items: &[Item]) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.notes = notes.unwrap_or_default().to_string();
        self.set_items(items);
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.notes.clear();
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.notes.is_empty() && self.rows.is_empty()
    }

    /// Rows with both fields non-blank, trimmed, in row order. Other rows are skipped.
    pub fn collect_items(&self) -> Vec<Item> {
        self.rows
            .iter()
            .filter(|row| row.is_complete())
            .map(|row| Item::new(row.name.trim(), row.content.trim()))
            .collect()
    }

    /// Rows that will be skipped even though the user typed something
    pub fn incomplete_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_partial()).count()
    }

    /// Presence checks (title first), then the request body
    pub fn to_payload(&self) -> Result<EntryPayload, ValidationError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(EntryPayload {
            title: title.to_string(),
            content: content.to_string(),
            notes: self.notes.trim().to_string(),
            items: self.collect_items(),
        })
    }

    fn push_row(&mut self, name: String, content: String) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(ItemRow { key, name, content });
        key
    }
}
