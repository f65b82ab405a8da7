use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailOverlayState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailOverlayState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { movie } => DetailOverlayState::Visible { movie },
            DetailIntent::Close => DetailOverlayState::Hidden,
        }
    }
}
