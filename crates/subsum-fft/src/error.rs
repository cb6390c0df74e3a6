//! Error type for the FFT engine.

/// Structural precondition failures of the transform and multiplication.
///
/// These always indicate a caller bug (wrong padding); the engine never
/// recovers from them and never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The sequence length is zero or not a power of two.
    #[error("invalid transform length {0}: must be a non-zero power of two")]
    InvalidLength(usize),

    /// The two operands of a polynomial multiplication differ in length.
    #[error("mismatched operand lengths: {left} vs {right}")]
    MismatchedOperands {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

/// Check that `n` is a usable transform length.
pub(crate) fn check_length(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength(n))
    }
}
