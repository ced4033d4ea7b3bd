//! Entry Form Component
//!
//! Title, content, notes, item rows, and the submit / update + cancel controls.

use leptos::prelude::*;

use crate::client::TITLE_INPUT_ID;
use crate::components::ItemRows;
use crate::context::AppContext;
use crate::session::EditMode;

#[component]
pub fn EntryFormPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let editing = move || matches!(ctx.mode(), EditMode::Editing(_));

    let submit = move |_| ctx.spawn(|client| async move { client.post_entry().await });
    let update = move |_| ctx.spawn(|client| async move { client.update_entry().await });
    let cancel = move |_| ctx.client().cancel_edit();

    view! {
        <section class="entry-form">
            <input
                type="text"
                id=TITLE_INPUT_ID
                placeholder="タイトル"
                prop:value=move || ctx.form().title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.client().edit_form(|form| form.title = value);
                }
            />
            <textarea
                id="diaryContent"
                placeholder="今日の出来事"
                prop:value=move || ctx.form().content
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.client().edit_form(|form| form.content = value);
                }
            ></textarea>
            <textarea
                id="diaryNotes"
                placeholder="メモ（任意）"
                prop:value=move || ctx.form().notes
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.client().edit_form(|form| form.notes = value);
                }
            ></textarea>

            <ItemRows />

            <div class="form-buttons">
                <Show when=move || !editing()>
                    <button id="submitButton" on:click=submit>"投稿"</button>
                </Show>
                <Show when=editing>
                    <button id="updateButton" on:click=update>"更新"</button>
                    <button id="cancelButton" on:click=cancel>"キャンセル"</button>
                </Show>
            </div>
        </section>
    }
}
