//! Form state and its confirmation view.

pub mod form;
pub mod mvi;
pub mod summary;
