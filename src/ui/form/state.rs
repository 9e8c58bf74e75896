use crate::record::{FormRecord, Submission, ValidationErrors};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Editing,
    Confirming,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing {
        record: FormRecord,
        errors: ValidationErrors,
    },
    /// Read-only review. `record` and `errors` are kept for `Back`.
    Confirming {
        record: FormRecord,
        errors: ValidationErrors,
        submission: Submission,
    },
}

impl Default for FormState {
    fn default() -> Self {
        Self::Editing {
            record: FormRecord::default(),
            errors: ValidationErrors::default(),
        }
    }
}

impl UiState for FormState {}

impl FormState {
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Editing { .. } => SessionPhase::Editing,
            Self::Confirming { .. } => SessionPhase::Confirming,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn record(&self) -> &FormRecord {
        match self {
            Self::Editing { record, .. } | Self::Confirming { record, .. } => record,
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        match self {
            Self::Editing { errors, .. } | Self::Confirming { errors, .. } => errors,
        }
    }

    pub fn submission(&self) -> Option<&Submission> {
        match self {
            Self::Confirming { submission, .. } => Some(submission),
            Self::Editing { .. } => None,
        }
    }

    /// Whether the review button should be enabled. The submission gate is
    /// stricter: an untouched deposit field has no error yet still fails it.
    pub fn can_submit(&self) -> bool {
        match self {
            Self::Editing { record, errors } => {
                record.verification_passed()
                    && record.document().is_some()
                    && errors.deposit.is_none()
                    && record.country().is_some()
            }
            Self::Confirming { .. } => false,
        }
    }
}
