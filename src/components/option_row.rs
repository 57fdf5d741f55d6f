//! Free-form property rows: edit, remove, and declare new paths.

use leptos::prelude::*;

use crate::app::StoreHandle;
use crate::store::dispatch;
use crate::util::prop_list::OptionEntry;
use crate::util::prop_paths::{display_scalar, infer_scalar, overlay_with_value, validate_path};

/// One key/value row of the properties list. Commits re-interpret the typed
/// text, so entering `12` into a row that held a string stores a number.
#[component]
pub fn OptionRow(entry: OptionEntry) -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let shown = display_scalar(&entry.value);
    let draft = RwSignal::new(shown.clone());

    let commit = {
        let path = entry.path.clone();
        move || {
            let text = draft.get();
            if text == shown {
                return;
            }
            dispatch::change_option(store, overlay_with_value(&path, infer_scalar(&text)));
        }
    };
    let commit_blur = commit.clone();

    let on_delete = {
        let path = entry.path.clone();
        move |_| dispatch::delete_option(store, &path)
    };

    view! {
        <div class="option-row">
            <span class="option-row__path">{entry.path.clone()}</span>
            <input
                class="option-row__input"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit_blur()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
            <button class="option-row__delete" on:click=on_delete title="Remove property">
                "×"
            </button>
        </div>
    }
}

/// Collapsed "+" affordance that expands into a path/value form. Commits go
/// through the declared-property validation; rejected paths leave the form
/// open with the typed text in place.
#[component]
pub fn AddOptionRow() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let expanded = RwSignal::new(false);
    let draft_path = RwSignal::new(String::new());
    let draft_value = RwSignal::new(String::new());

    let reset = move || {
        draft_path.set(String::new());
        draft_value.set(String::new());
        expanded.set(false);
    };

    let commit = move || {
        let path = draft_path.get();
        if validate_path(&path).is_err() {
            return;
        }
        dispatch::add_declared_property(store, &path, &draft_value.get());
        reset();
    };

    view! {
        <div class="add-option" class:add-option--open=move || expanded.get()>
            <Show
                when=move || expanded.get()
                fallback=move || {
                    view! {
                        <button class="add-option__plus" on:click=move |_| expanded.set(true)>
                            "+ Add property"
                        </button>
                    }
                }
            >
                <input
                    class="add-option__path"
                    placeholder="path.like.this"
                    prop:value=move || draft_path.get()
                    on:input=move |ev| draft_path.set(event_target_value(&ev))
                />
                <input
                    class="add-option__value"
                    placeholder="value"
                    prop:value=move || draft_value.get()
                    on:input=move |ev| draft_value.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button class="btn btn--primary add-option__commit" on:click=move |_| commit()>
                    "Add"
                </button>
                <button class="btn add-option__cancel" on:click=move |_| reset()>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
