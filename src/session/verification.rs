/// Handle to the external human-verification widget.
///
/// The widget delivers tokens through [`Session::on_verification`]; the
/// session calls `reset` once a submission has been confirmed.
///
/// [`Session::on_verification`]: crate::session::Session::on_verification
pub trait VerificationWidget {
    fn reset(&mut self);
}

/// For hosts without a widget to reset.
impl VerificationWidget for () {
    fn reset(&mut self) {}
}
