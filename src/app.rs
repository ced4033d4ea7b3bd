//! Diary Frontend App
//!
//! Page layout: header, entry form, entry list.

use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::browser::WindowBrowser;
use crate::client::{Change, DiaryClient};
use crate::components::{DiaryHeader, EntryFormPanel, EntryList};
use crate::config::ClientConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let (entries_version, set_entries_version) = signal(0u32);
    let (form_version, set_form_version) = signal(0u32);

    let client = DiaryClient::new(HttpBackend::new(config.clone()), WindowBrowser, &config.login_path)
        .with_change_listener(move |change| match change {
            Change::Entries => set_entries_version.update(|v| *v += 1),
            Change::Form => set_form_version.update(|v| *v += 1),
        });

    let ctx = AppContext::new(client, entries_version, form_version);
    provide_context(ctx);

    // Initial load
    ctx.spawn(|client| async move { client.load_entries().await });

    view! {
        <div class="container">
            <DiaryHeader />
            <EntryFormPanel />
            <EntryList />
        </div>
    }
}
