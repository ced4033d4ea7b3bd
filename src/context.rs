//! Application Context
//!
//! Shared handle provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBackend;
use crate::browser::WindowBrowser;
use crate::client::DiaryClient;
use crate::form::EntryForm;
use crate::models::Entry;
use crate::session::EditMode;

/// The controller as wired in the browser
pub type WebClient = DiaryClient<HttpBackend, WindowBrowser>;

/// App-wide handle: the controller plus one version signal per page region
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<WebClient, LocalStorage>,
    /// Bumped when the entry list was replaced
    pub entries_version: ReadSignal<u32>,
    /// Bumped when the form or edit mode changed outside of typing
    pub form_version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(client: WebClient, entries_version: ReadSignal<u32>, form_version: ReadSignal<u32>) -> Self {
        Self {
            client: StoredValue::new_local(client),
            entries_version,
            form_version,
        }
    }

    pub fn client(&self) -> WebClient {
        self.client.get_value()
    }

    /// Run an async action on the controller
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(WebClient) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.client()));
    }

    /// Entry list, tracked
    pub fn entries(&self) -> Vec<Entry> {
        self.entries_version.track();
        self.client.with_value(|client| client.entries())
    }

    /// Form snapshot, tracked
    pub fn form(&self) -> EntryForm {
        self.form_version.track();
        self.client.with_value(|client| client.form())
    }

    /// Edit mode, tracked
    pub fn mode(&self) -> EditMode {
        self.form_version.track();
        self.client.with_value(|client| client.mode())
    }
}
