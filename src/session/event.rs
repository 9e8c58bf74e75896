use crate::record::{Document, Submission};
use crate::session::lifecycle::{Session, SessionError, SubmitOutcome};
use crate::session::sink::SubmissionSink;
use crate::session::verification::VerificationWidget;

/// A discrete input event, handled strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Empty string clears the selection.
    CountryChanged(String),
    DepositChanged(String),
    /// `None` when the picker was emptied.
    DocumentChanged(Option<Document>),
    VerificationChanged(Option<String>),
    Submit,
    Back,
    Confirm,
}

/// What the view should show after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Updated,
    Submit(SubmitOutcome),
    Editing,
    Submitted(Submission),
}

impl<S: SubmissionSink, V: VerificationWidget> Session<S, V> {
    pub fn handle(&mut self, event: SessionEvent) -> Result<Feedback, SessionError> {
        match event {
            SessionEvent::CountryChanged(name) => self.select_country(&name)?,
            SessionEvent::DepositChanged(input) => self.enter_deposit(&input)?,
            SessionEvent::DocumentChanged(Some(doc)) => self.choose_document(doc)?,
            SessionEvent::DocumentChanged(None) => self.clear_document()?,
            SessionEvent::VerificationChanged(token) => self.on_verification(token.as_deref())?,
            SessionEvent::Submit => return self.submit().map(Feedback::Submit),
            SessionEvent::Back => {
                self.back()?;
                return Ok(Feedback::Editing);
            }
            SessionEvent::Confirm => return self.confirm().map(Feedback::Submitted),
        }
        Ok(Feedback::Updated)
    }
}
