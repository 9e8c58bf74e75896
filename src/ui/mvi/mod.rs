//! Model-View-Intent primitives for the form.
//!
//! ```text
//! Input event ──→ Intent ──→ Reducer ──→ State ──→ View
//!      ↑                                            │
//!      └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view renders
//! - **Intent**: A validated user action or collaborator callback
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
