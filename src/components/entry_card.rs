//! Entry Card Component
//!
//! One diary entry with its notes, items, dates, and edit/delete actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::html::text_to_html;
use crate::messages;
use crate::models::{timestamp, Entry};

#[component]
pub fn EntryCard(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = entry.id;
    let actions = entry.can_edit.then(|| {
        let target = entry.clone();
        view! {
            <div class="action-buttons">
                <button
                    class="edit-btn"
                    on:click=move |_| {
                        ctx.client().start_edit(
                            target.id,
                            &target.title,
                            &target.content,
                            Some(target.notes.as_str()),
                            &target.items,
                        );
                    }
                >
                    "編集"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| ctx.spawn(move |client| async move { client.delete_entry(id).await })
                >
                    "削除"
                </button>
            </div>
        }
    });

    let notes = entry.has_notes().then(|| view! {
        <div class="entry-notes">
            <span class="entry-notes-label">"メモ"</span>
            <div inner_html=text_to_html(&entry.notes)></div>
        </div>
    });

    let items = (!entry.items.is_empty()).then(|| view! {
        <div class="entry-items">
            <span class="items-label">"活動項目"</span>
            {entry.items.iter().map(|item| view! {
                <div class="item">
                    <div class="item-name">{item.item_name.clone()}</div>
                    <div class="item-content" inner_html=text_to_html(&item.item_content)></div>
                </div>
            }).collect_view()}
        </div>
    });

    let withdrawn = (!entry.is_visible).then(|| view! {
        <span class="withdrawn-badge">{messages::WITHDRAWN_AUTHOR}</span>
    });

    let created = entry.created_at.as_ref().map(timestamp::display).unwrap_or_default();
    let updated = entry.updated_at.as_ref().map(|ts| view! {
        <span class="entry-updated">
            <span class="date-label">"最終更新:"</span>
            {timestamp::display(ts)}
        </span>
    });

    view! {
        <div class="entry">
            {actions}
            <div class="entry-title">{entry.title.clone()}</div>
            <div class="entry-author">
                {format!("投稿者: {} (@{})", entry.author_name, entry.author_userid)}
                {withdrawn}
            </div>
            <div class="entry-content" inner_html=text_to_html(&entry.content)></div>
            {notes}
            {items}
            <div class="entry-dates">
                <span class="date-label">"作成:"</span>
                {created}
                {updated}
            </div>
        </div>
    }
}
