//! Session lifecycle.
//!
//! Wires input events to the field validators and the form reducer, owns
//! the single [`FormState`](crate::ui::form::FormState) of a session, and
//! hands confirmed submissions to a [`SubmissionSink`] before starting over.

mod event;
mod lifecycle;
mod sink;
mod verification;

pub use event::{Feedback, SessionEvent};
pub use lifecycle::{Session, SessionError, SubmitOutcome};
pub use sink::{JsonSink, SubmissionSink};
pub use verification::VerificationWidget;
