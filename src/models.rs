//! Frontend Models
//!
//! Data structures matching the diary server's JSON payloads.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Activity item attached to an entry (order is display order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_name: String,
    pub item_content: String,
}

impl Item {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            item_name: name.into(),
            item_content: content.into(),
        }
    }
}

/// Diary entry as returned by `GET /entries`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub items: Vec<Item>,
    pub author_name: String,
    pub author_userid: String,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub user_id: Option<u32>,
    /// False when the author's account was withdrawn (only admins see these)
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl Entry {
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

/// Body of `POST /entries` and `PUT /entries/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPayload {
    pub title: String,
    pub content: String,
    pub notes: String,
    pub items: Vec<Item>,
}

/// Error reply body, `{"error": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn null_as_empty_vec<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Item>, D::Error> {
    Ok(Option::<Vec<Item>>::deserialize(de)?.unwrap_or_default())
}

/// Server timestamps: naive ISO-8601, or RFC 3339 with an offset
pub mod timestamp {
    use super::*;

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        raw.parse::<NaiveDateTime>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
    }

    /// Unparseable values become `None` so one bad entry does not fail the whole list
    pub fn optional<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(de)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        let parsed = parse(&raw);
        if parsed.is_none() {
            log::warn!("ignoring unparseable timestamp {:?}", raw);
        }
        Ok(parsed)
    }

    /// Japanese locale layout, e.g. `2024/5/1 9:05:03`
    pub fn display(ts: &NaiveDateTime) -> String {
        ts.format("%Y/%-m/%-d %-H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_server_json() {
        let json = r#"{
            "id": 7,
            "title": "Walk",
            "content": "Went to the park",
            "notes": null,
            "items": [
                {"item_name": "run", "item_content": "5km"},
                {"item_name": "read", "item_content": "chapter 3"}
            ],
            "created_at": "2024-05-01T09:05:03.123456",
            "updated_at": null,
            "author_name": "Hanako",
            "author_userid": "hanako",
            "is_visible": true,
            "user_id": 3,
            "can_edit": true
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.notes, "");
        assert!(!entry.has_notes());
        assert_eq!(entry.items[0], Item::new("run", "5km"));
        assert_eq!(entry.items[1].item_name, "read");
        assert!(entry.updated_at.is_none());
        assert_eq!(entry.user_id, Some(3));
        assert!(entry.can_edit);
        assert_eq!(timestamp::display(&entry.created_at.unwrap()), "2024/5/1 9:05:03");
    }

    #[test]
    fn test_entry_defaults_for_missing_fields() {
        let json = r#"{"id": 1, "title": "t", "content": "c",
            "author_name": "a", "author_userid": "u", "created_at": "2024-01-02T03:04:05"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.items.is_empty());
        assert!(!entry.can_edit);
        assert!(entry.is_visible);
    }

    #[test]
    fn test_malformed_timestamp_only_drops_that_field() {
        let json = r#"[
            {"id": 1, "title": "t", "content": "c", "author_name": "a", "author_userid": "u",
             "created_at": "not a date", "updated_at": "2024-02-03T04:05:06"},
            {"id": 2, "title": "t2", "content": "c2", "author_name": "a", "author_userid": "u",
             "created_at": "2024-01-02T03:04:05"}
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].created_at.is_none());
        assert_eq!(timestamp::display(&entries[0].updated_at.unwrap()), "2024/2/3 4:05:06");
        assert_eq!(timestamp::display(&entries[1].created_at.unwrap()), "2024/1/2 3:04:05");
    }

    #[test]
    fn test_timestamp_accepts_rfc3339() {
        let ts = timestamp::parse("2024-12-31T23:59:00+09:00").unwrap();
        assert_eq!(timestamp::display(&ts), "2024/12/31 23:59:00");
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_payload_serializes_item_fields_in_order() {
        let payload = EntryPayload {
            title: "T".to_string(),
            content: "C".to_string(),
            notes: String::new(),
            items: vec![Item::new("b", "2"), Item::new("a", "1")],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["items"][0]["item_name"], "b");
        assert_eq!(value["items"][1]["item_content"], "1");
        assert_eq!(value["notes"], "");
    }

    #[test]
    fn test_api_error_field() {
        let reply: ApiError = serde_json::from_str(r#"{"error": "ログインが必要です"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("ログインが必要です"));

        let reply: ApiError = serde_json::from_str(r#"{"message": "ログアウトしました"}"#).unwrap();
        assert!(reply.error.is_none());
    }
}
