use crate::config::Policy;
use crate::record::{Document, SelectedCountry};
use crate::ui::mvi::Intent;
use crate::validation::{DepositError, DocumentError};

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// `None` clears the selection.
    CountryChanged(Option<SelectedCountry>),
    DepositChanged {
        input: String,
        outcome: Result<f64, DepositError>,
    },
    /// A file was picked. On `Err` any earlier document is dropped too.
    DocumentChosen(Result<Document, DocumentError>),
    /// The picker was emptied. Leaves the inline error as it was.
    DocumentCleared,
    VerificationChanged { passed: bool },
    /// Runs the submission gate against the current record under `policy`.
    Submit { policy: Policy },
    Back,
    Confirm,
}

impl Intent for FormIntent {}
