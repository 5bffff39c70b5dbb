use std::rc::Rc;

use shared::SpinTally;
use yew::prelude::*;

pub enum TallyAction {
    Record(String),
    Reset,
}

#[derive(Default, PartialEq)]
pub struct TallyState {
    pub tally: SpinTally,
}

impl Reducible for TallyState {
    type Action = TallyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut tally = self.tally.clone();
        match action {
            TallyAction::Record(label) => tally.record(&label),
            TallyAction::Reset => tally.reset(),
        }
        Rc::new(Self { tally })
    }
}

/// Running win counts for the current page. Not persisted.
#[hook]
pub fn use_tally() -> UseReducerHandle<TallyState> {
    use_reducer(TallyState::default)
}
