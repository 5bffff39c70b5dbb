use std::rc::Rc;

use shared::color::{palette_color, Rgb};
use shared::{validate_entries, Entry};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct EntryEditorProps {
    pub entries: Rc<Vec<Entry>>,
    pub on_change: Callback<Vec<Entry>>,
    #[prop_or_default]
    pub on_reset: Callback<()>,
    /// Editing is locked while the wheel spins.
    #[prop_or_default]
    pub disabled: bool,
}

fn picker_value(color: &str) -> String {
    Rgb::parse(color)
        .map(Rgb::to_hex)
        .unwrap_or_else(|| "#000000".to_string())
}

/// Validates `list` and forwards it; returns false and records the message
/// when it is rejected.
fn try_apply(list: Vec<Entry>, on_change: &Callback<Vec<Entry>>, error: &UseStateHandle<Option<String>>) -> bool {
    match validate_entries(&list) {
        Ok(()) => {
            error.set(None);
            on_change.emit(list);
            true
        }
        Err(err) => {
            error.set(Some(err.user_message()));
            false
        }
    }
}

#[function_component(EntryEditor)]
pub fn entry_editor(props: &EntryEditorProps) -> Html {
    let draft = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let entries = props.entries.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let label = draft.trim().to_string();
            if label.is_empty() {
                return;
            }
            let mut list = entries.to_vec();
            list.push(Entry::new(label, palette_color(list.len())));
            if try_apply(list, &on_change, &error) {
                draft.set(String::new());
            }
        })
    };

    let rows = props.entries.iter().enumerate().map(|(index, entry)| {
        let on_label = {
            let entries = props.entries.clone();
            let on_change = props.on_change.clone();
            let error = error.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut list = entries.to_vec();
                list[index] = list[index].relabeled(input.value().trim());
                if !try_apply(list, &on_change, &error) {
                    input.set_value(entries[index].label());
                }
            })
        };
        let on_color = {
            let entries = props.entries.clone();
            let on_change = props.on_change.clone();
            let error = error.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut list = entries.to_vec();
                list[index] = list[index].recolored(input.value());
                try_apply(list, &on_change, &error);
            })
        };
        let on_remove = {
            let entries = props.entries.clone();
            let on_change = props.on_change.clone();
            let error = error.clone();
            let id = entry.id().to_string();
            Callback::from(move |_: MouseEvent| {
                let list: Vec<Entry> = entries.iter().filter(|e| e.id() != id).cloned().collect();
                try_apply(list, &on_change, &error);
            })
        };

        html! {
            <li key={entry.id().to_string()} class="flex items-center gap-2">
                <input
                    type="color"
                    aria-label="Entry color"
                    value={picker_value(entry.color())}
                    disabled={props.disabled}
                    onchange={on_color}
                    class={styles::COLOR_PICKER}
                />
                <input
                    type="text"
                    aria-label="Entry label"
                    value={entry.label().to_string()}
                    disabled={props.disabled}
                    onchange={on_label}
                    class={styles::INPUT}
                />
                <button
                    type="button"
                    aria-label="Remove entry"
                    disabled={props.disabled}
                    onclick={on_remove}
                    class={styles::BUTTON_DANGER}
                >
                    {"✕"}
                </button>
            </li>
        }
    });

    let on_reset = {
        let on_reset = props.on_reset.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            on_reset.emit(());
        })
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between mb-4">
                <h3 class={styles::TEXT_H3}>{format!("Entries ({})", props.entries.len())}</h3>
                <button type="button" onclick={on_reset} disabled={props.disabled} class={styles::BUTTON_SECONDARY}>
                    {"Reset"}
                </button>
            </div>

            <form onsubmit={onsubmit} class="flex gap-2 mb-4">
                <input
                    type="text"
                    placeholder="Add an entry"
                    value={(*draft).clone()}
                    disabled={props.disabled}
                    oninput={oninput}
                    class={if error.is_some() { styles::INPUT_ERROR } else { styles::INPUT }}
                />
                <button type="submit" disabled={props.disabled} class={styles::BUTTON_PRIMARY}>{"Add"}</button>
            </form>

            if let Some(message) = &*error {
                <p class={styles::TEXT_ERROR}>{message}</p>
            }

            <ul class="mt-4 space-y-2 max-h-96 overflow-y-auto">
                { for rows }
            </ul>
        </div>
    }
}
