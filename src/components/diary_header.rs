//! Diary Header Component
//!
//! Page title and logout button.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn DiaryHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let logout = move |_| ctx.spawn(|client| async move { client.logout().await });

    view! {
        <header class="diary-header">
            <h1>"日記"</h1>
            <button class="logout-btn" on:click=logout>"ログアウト"</button>
        </header>
    }
}
