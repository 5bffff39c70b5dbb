use std::rc::Rc;

use shared::{Entry, Preset};
use yew::prelude::*;

use crate::storage::{initial_entries, save_entries};

#[derive(Clone)]
pub struct EntriesState {
    pub entries: Rc<Vec<Entry>>,
    pub set_entries: Callback<Vec<Entry>>,
    pub reset: Callback<()>,
}

/// Entry list for `preset`, persisted to local storage on every change.
#[hook]
pub fn use_entries(preset: Preset) -> EntriesState {
    let entries = use_state(|| Rc::new(initial_entries(preset)));

    let set_entries = {
        let entries = entries.clone();
        Callback::from(move |list: Vec<Entry>| {
            save_entries(preset, &list);
            entries.set(Rc::new(list));
        })
    };

    let reset = {
        let set_entries = set_entries.clone();
        Callback::from(move |_| set_entries.emit(preset.entries()))
    };

    EntriesState {
        entries: (*entries).clone(),
        set_entries,
        reset,
    }
}
