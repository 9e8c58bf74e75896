use thiserror::Error;

use crate::record::SelectedCountry;
use crate::reference::lookup_risk;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryError {
    #[error("Unknown country '{0}'")]
    Unknown(String),
}

/// An empty selection is accepted as "no country" and only blocks submission.
pub fn validate_country(name: &str) -> Result<Option<SelectedCountry>, CountryError> {
    if name.is_empty() {
        return Ok(None);
    }
    let risk = lookup_risk(name).ok_or_else(|| CountryError::Unknown(name.to_string()))?;
    Ok(Some(SelectedCountry {
        name: name.to_string(),
        risk,
    }))
}
