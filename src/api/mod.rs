//! Diary Server API
//!
//! The REST calls the client makes, behind a trait so the controller can be
//! driven by a fake in tests.

mod http;

pub use http::HttpBackend;

use crate::error::ClientError;
use crate::models::{Entry, EntryPayload};

/// REST surface of the diary server
#[allow(async_fn_in_trait)]
pub trait DiaryBackend {
    /// `GET /entries`
    async fn list_entries(&self) -> Result<Vec<Entry>, ClientError>;
    /// `POST /entries`
    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ClientError>;
    /// `PUT /entries/{id}`
    async fn update_entry(&self, id: u32, payload: &EntryPayload) -> Result<(), ClientError>;
    /// `DELETE /entries/{id}`
    async fn delete_entry(&self, id: u32) -> Result<(), ClientError>;
    /// `POST /api/logout`
    async fn logout(&self) -> Result<(), ClientError>;
}
