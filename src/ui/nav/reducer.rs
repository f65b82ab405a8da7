use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, TabId};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let active = match intent {
            NavIntent::Select(tab) => tab,
            NavIntent::Next => step(state.active, 1),
            NavIntent::Prev => step(state.active, -1),
        };
        NavState { active }
    }
}

fn step(tab: TabId, delta: isize) -> TabId {
    let len = TabId::ALL.len() as isize;
    let index = TabId::ALL
        .iter()
        .position(|candidate| *candidate == tab)
        .unwrap_or(0) as isize;
    TabId::ALL[(index + delta).rem_euclid(len) as usize]
}
