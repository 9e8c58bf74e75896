//! Base trait for view state.

/// Marker trait for state objects.
///
/// `Default` is the state a fresh session starts in; `PartialEq` lets
/// callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
