//! Entry List Component
//!
//! Re-renders the whole list whenever a new one is loaded.

use leptos::prelude::*;

use crate::components::EntryCard;
use crate::context::AppContext;
use crate::messages;

#[component]
pub fn EntryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="entries" class="entries">
            {move || {
                let entries = ctx.entries();
                if entries.is_empty() {
                    view! { <p class="no-entries">{messages::NO_ENTRIES}</p> }.into_any()
                } else {
                    entries
                        .into_iter()
                        .map(|entry| view! { <EntryCard entry=entry /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
