//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents carry already-validated input (field changes, verification
/// callbacks) or navigation (submit, back, confirm). Validation happens
/// before an intent is built, so reducers never parse raw input.
pub trait Intent: Send + 'static {}
