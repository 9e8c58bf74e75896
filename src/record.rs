//! Form data owned by a session: the editable record, its inline errors and
//! the finalized submission emitted on confirm.

use serde::Serialize;

use crate::reference::RiskTier;

/// A proof-of-address file as described by the document picker.
/// The contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// A country from the reference table together with its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCountry {
    pub name: String,
    pub risk: RiskTier,
}

/// Current field values of the form.
///
/// The country and its risk tier are stored as one value, so the tier is
/// always the tier of the selected country and absent without one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormRecord {
    country: Option<SelectedCountry>,
    deposit_input: String,
    deposit_amount: Option<f64>,
    document: Option<Document>,
    verification_passed: bool,
}

impl FormRecord {
    pub fn country(&self) -> Option<&str> {
        self.country.as_ref().map(|c| c.name.as_str())
    }

    pub fn risk_tier(&self) -> Option<RiskTier> {
        self.country.as_ref().map(|c| c.risk)
    }

    pub fn selected_country(&self) -> Option<&SelectedCountry> {
        self.country.as_ref()
    }

    /// Raw deposit text as typed.
    pub fn deposit_input(&self) -> &str {
        &self.deposit_input
    }

    /// Parsed deposit, present only while the input is valid.
    pub fn deposit_amount(&self) -> Option<f64> {
        self.deposit_amount
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn verification_passed(&self) -> bool {
        self.verification_passed
    }

    pub(crate) fn set_country(&mut self, country: Option<SelectedCountry>) {
        self.country = country;
    }

    pub(crate) fn set_deposit(&mut self, input: String, amount: Option<f64>) {
        self.deposit_input = input;
        self.deposit_amount = amount;
    }

    pub(crate) fn set_document(&mut self, document: Option<Document>) {
        self.document = document;
    }

    pub(crate) fn set_verification(&mut self, passed: bool) {
        self.verification_passed = passed;
    }
}

/// Inline error messages shown next to the deposit and document fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub deposit: Option<String>,
    pub document: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.deposit.is_none() && self.document.is_none()
    }
}

/// Finalized record handed to the submission sink.
///
/// Only the submission gate builds one, so every instance describes a
/// record that passed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    country: String,
    risk_tier: RiskTier,
    deposit_amount: f64,
    document: Document,
    verification_passed: bool,
}

impl Submission {
    pub(crate) fn new(
        country: &SelectedCountry,
        deposit_amount: f64,
        document: Document,
    ) -> Self {
        Self {
            country: country.name.clone(),
            risk_tier: country.risk,
            deposit_amount,
            document,
            verification_passed: true,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    pub fn deposit_amount(&self) -> f64 {
        self.deposit_amount
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn verification_passed(&self) -> bool {
        self.verification_passed
    }
}
