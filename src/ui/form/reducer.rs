use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;
use crate::validation::{check_submission, GateFailure};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::CountryChanged(country) => match state {
                FormState::Editing { mut record, errors } => {
                    record.set_country(country);
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::DepositChanged { input, outcome } => match state {
                FormState::Editing {
                    mut record,
                    mut errors,
                } => {
                    errors.deposit = outcome.as_ref().err().map(|e| e.to_string());
                    record.set_deposit(input, outcome.ok());
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::DocumentChosen(outcome) => match state {
                FormState::Editing {
                    mut record,
                    mut errors,
                } => {
                    errors.document = outcome.as_ref().err().map(|e| e.to_string());
                    record.set_document(outcome.ok());
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::DocumentCleared => match state {
                FormState::Editing { mut record, errors } => {
                    record.set_document(None);
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::VerificationChanged { passed } => match state {
                FormState::Editing { mut record, errors } => {
                    record.set_verification(passed);
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::Submit { policy } => match state {
                FormState::Editing { record, errors } => match check_submission(&record, &policy) {
                    Ok(submission) => FormState::Confirming {
                        record,
                        errors,
                        submission,
                    },
                    Err(failures) => {
                        let mut errors = errors;
                        for failure in &failures {
                            match failure {
                                GateFailure::Document(_) => {
                                    errors.document = Some(failure.to_string());
                                }
                                GateFailure::DepositOutOfRange { .. } => {
                                    errors.deposit = Some(failure.to_string());
                                }
                                // Shown once as a notice, no inline slot
                                GateFailure::VerificationFailed
                                | GateFailure::CountryUnselected => {}
                            }
                        }
                        FormState::Editing { record, errors }
                    }
                },
                other => other,
            },
            FormIntent::Back => match state {
                FormState::Confirming { record, errors, .. } => {
                    FormState::Editing { record, errors }
                }
                other => other,
            },
            FormIntent::Confirm => match state {
                FormState::Confirming { .. } => FormState::default(),
                other => other,
            },
        }
    }
}
