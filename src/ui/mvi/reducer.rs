//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where form state changes.
///
/// `reduce` is a pure function: (State, Intent) -> State. Side effects
/// such as emitting a submission belong to the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
