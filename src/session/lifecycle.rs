use thiserror::Error;

use crate::config::Policy;
use crate::record::{Document, Submission};
use crate::session::sink::SubmissionSink;
use crate::session::verification::VerificationWidget;
use crate::ui::form::{FormIntent, FormReducer, FormState, SessionPhase};
use crate::ui::mvi::Reducer;
use crate::validation::{
    check_submission, validate_country, validate_deposit, validate_document,
    verification_passed, CountryError, GateFailure,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("The form cannot be changed while confirming")]
    ReadOnly,
    #[error("Cannot {action}: the form is not being confirmed")]
    NotConfirming { action: &'static str },
    #[error(transparent)]
    Country(#[from] CountryError),
}

/// Result of asking to review the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirming,
    /// Every failing condition, in check order. See [`GateFailure::is_notice`].
    Blocked(Vec<GateFailure>),
}

/// Owns the form state for one user session and is its only writer.
pub struct Session<S, V> {
    state: FormState,
    policy: Policy,
    sink: S,
    widget: V,
}

impl<S: SubmissionSink, V: VerificationWidget> Session<S, V> {
    pub fn new(policy: Policy, sink: S, widget: V) -> Self {
        Self {
            state: FormState::default(),
            policy,
            sink,
            widget,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn widget(&self) -> &V {
        &self.widget
    }

    /// Review-button enablement for the current state.
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Selects a country by exact name; an empty name clears the selection.
    pub fn select_country(&mut self, name: &str) -> Result<(), SessionError> {
        self.ensure_editing("country")?;
        let country = validate_country(name).inspect_err(|_| {
            tracing::warn!("country rejected");
        })?;
        tracing::debug!(selected = country.is_some(), "country changed");
        self.dispatch(FormIntent::CountryChanged(country));
        Ok(())
    }

    pub fn enter_deposit(&mut self, input: &str) -> Result<(), SessionError> {
        self.ensure_editing("deposit")?;
        let outcome = validate_deposit(input, &self.policy.deposit);
        tracing::debug!(valid = outcome.is_ok(), "deposit changed");
        self.dispatch(FormIntent::DepositChanged {
            input: input.to_string(),
            outcome,
        });
        Ok(())
    }

    pub fn choose_document(&mut self, candidate: Document) -> Result<(), SessionError> {
        self.ensure_editing("document")?;
        let outcome = validate_document(candidate, &self.policy.document);
        match &outcome {
            Ok(_) => tracing::debug!("document accepted"),
            Err(err) => tracing::debug!(error = %err, "document rejected"),
        }
        self.dispatch(FormIntent::DocumentChosen(outcome));
        Ok(())
    }

    pub fn clear_document(&mut self) -> Result<(), SessionError> {
        self.ensure_editing("document")?;
        tracing::debug!("document cleared");
        self.dispatch(FormIntent::DocumentCleared);
        Ok(())
    }

    /// Verification widget callback. `None` means expired or reset.
    pub fn on_verification(&mut self, token: Option<&str>) -> Result<(), SessionError> {
        self.ensure_editing("verification")?;
        let passed = verification_passed(token);
        tracing::debug!(passed, "verification changed");
        self.dispatch(FormIntent::VerificationChanged { passed });
        Ok(())
    }

    /// Runs the submission gate and moves to review when it passes.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        self.ensure_editing("submit")?;
        self.dispatch(FormIntent::Submit {
            policy: self.policy.clone(),
        });
        if self.state.submission().is_some() {
            tracing::info!("submission gate passed, confirming");
            return Ok(SubmitOutcome::Confirming);
        }
        // The reducer keeps only the inline slots; report every failure.
        let failures = check_submission(self.state.record(), &self.policy)
            .err()
            .unwrap_or_default();
        tracing::info!(failures = failures.len(), "submission gate blocked");
        Ok(SubmitOutcome::Blocked(failures))
    }

    /// Returns to editing with every value and error intact.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.ensure_confirming("go back")?;
        tracing::info!("back to editing");
        self.dispatch(FormIntent::Back);
        Ok(())
    }

    /// Emits the reviewed submission, resets the form and the verification
    /// widget.
    pub fn confirm(&mut self) -> Result<Submission, SessionError> {
        let submission = self
            .state
            .submission()
            .cloned()
            .ok_or(SessionError::NotConfirming { action: "confirm" })?;

        self.sink.submit(&submission);
        tracing::info!("submission emitted");

        self.dispatch(FormIntent::Confirm);
        self.widget.reset();
        Ok(submission)
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn ensure_editing(&self, field: &'static str) -> Result<(), SessionError> {
        if self.state.is_editing() {
            Ok(())
        } else {
            tracing::warn!(field, "ignored input while confirming");
            Err(SessionError::ReadOnly)
        }
    }

    fn ensure_confirming(&self, action: &'static str) -> Result<(), SessionError> {
        match self.state.phase() {
            SessionPhase::Confirming => Ok(()),
            SessionPhase::Editing => Err(SessionError::NotConfirming { action }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::RiskTier;

    fn session() -> Session<Vec<Submission>, ()> {
        Session::new(Policy::default(), Vec::new(), ())
    }

    fn fill(session: &mut Session<Vec<Submission>, ()>) {
        session.select_country("Germany").unwrap();
        session.enter_deposit("45000").unwrap();
        session
            .choose_document(Document::new("bill.gif", "image/gif", 100))
            .unwrap();
        session.on_verification(Some("tok")).unwrap();
    }

    #[test]
    fn country_change_derives_tier() {
        let mut session = session();
        session.select_country("China").unwrap();
        assert_eq!(session.state().record().risk_tier(), Some(RiskTier::Mid));
        session.select_country("").unwrap();
        assert_eq!(session.state().record().risk_tier(), None);
    }

    #[test]
    fn unknown_country_leaves_record_untouched() {
        let mut session = session();
        session.select_country("France").unwrap();
        let err = session.select_country("Gondor").unwrap_err();
        assert!(matches!(err, SessionError::Country(_)));
        assert_eq!(session.state().record().country(), Some("France"));
    }

    #[test]
    fn eligibility_follows_fields() {
        let mut session = session();
        assert!(!session.can_submit());
        fill(&mut session);
        assert!(session.can_submit());
        session.on_verification(None).unwrap();
        assert!(!session.can_submit());
    }

    #[test]
    fn eligible_with_untouched_deposit_but_gate_blocks() {
        let mut session = session();
        session.select_country("Germany").unwrap();
        session
            .choose_document(Document::new("bill.gif", "image/gif", 100))
            .unwrap();
        session.on_verification(Some("tok")).unwrap();
        assert!(session.can_submit());

        let outcome = session.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked(vec![GateFailure::DepositOutOfRange {
                min: 20_000.0,
                max: 50_000.0
            }])
        );
        assert!(!session.can_submit());
    }

    #[test]
    fn inputs_rejected_while_confirming() {
        let mut session = session();
        fill(&mut session);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::Confirming);

        assert_eq!(session.enter_deposit("1"), Err(SessionError::ReadOnly));
        assert_eq!(session.select_country("Italy"), Err(SessionError::ReadOnly));
        assert_eq!(session.on_verification(None), Err(SessionError::ReadOnly));
        assert_eq!(session.clear_document(), Err(SessionError::ReadOnly));
        assert_eq!(session.submit(), Err(SessionError::ReadOnly));
        assert_eq!(session.state().record().deposit_input(), "45000");
    }

    #[test]
    fn back_and_confirm_require_confirming() {
        let mut session = session();
        let err = session.back().unwrap_err();
        assert_eq!(err, SessionError::NotConfirming { action: "go back" });
        assert_eq!(
            err.to_string(),
            "Cannot go back: the form is not being confirmed"
        );
        assert_eq!(
            session.confirm().unwrap_err().to_string(),
            "Cannot confirm: the form is not being confirmed"
        );
        assert!(session.sink().is_empty());
    }

    #[test]
    fn submission_matches_the_reviewed_record() {
        let mut session = session();
        fill(&mut session);
        session.submit().unwrap();

        let record = session.state().record();
        let submission = session.state().submission().unwrap();
        assert_eq!(Some(submission.country()), record.country());
        assert_eq!(Some(submission.risk_tier()), record.risk_tier());
        assert_eq!(Some(submission.deposit_amount()), record.deposit_amount());
        assert_eq!(Some(submission.document()), record.document());
    }

    #[test]
    fn confirm_emits_and_resets() {
        let mut session = session();
        fill(&mut session);
        session.submit().unwrap();
        let submission = session.confirm().unwrap();

        assert_eq!(session.sink(), &vec![submission]);
        assert_eq!(session.state(), &FormState::default());
        assert_eq!(session.phase(), SessionPhase::Editing);
    }
}
