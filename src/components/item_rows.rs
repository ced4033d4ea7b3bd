//! Item Rows Component
//!
//! Editable activity item sub-forms attached to the entry form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::form::ItemRow;
use crate::messages;

#[component]
pub fn ItemRows() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Typing does not bump the form version; the hint tracks keystrokes here
    let (edits, set_edits) = signal(0u32);

    let hint = move || {
        edits.track();
        let skipped = ctx.form().incomplete_rows();
        (skipped > 0).then(|| view! {
            <p class="items-hint">{messages::incomplete_rows_hint(skipped)}</p>
        })
    };

    view! {
        <div class="items-section">
            <div id="itemsList" class="items-list">
                <For
                    each=move || ctx.form().rows().to_vec()
                    key=|row| row.key
                    children=move |row: ItemRow| {
                        let key = row.key;
                        view! {
                            <div class="item-entry">
                                <input
                                    type="text"
                                    class="item-name"
                                    placeholder="項目名"
                                    prop:value=row.name
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        ctx.client().edit_form(|form| form.set_row_name(key, value));
                                        set_edits.update(|v| *v += 1);
                                    }
                                />
                                <textarea
                                    class="item-content"
                                    placeholder="内容"
                                    prop:value=row.content
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        ctx.client().edit_form(|form| form.set_row_content(key, value));
                                        set_edits.update(|v| *v += 1);
                                    }
                                ></textarea>
                                <button
                                    type="button"
                                    class="remove-item-btn"
                                    on:click=move |_| ctx.client().remove_item_row(key)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            {hint}
            <button type="button" class="add-item-btn" on:click=move |_| ctx.client().add_item_row()>
                "活動項目を追加"
            </button>
        </div>
    }
}
