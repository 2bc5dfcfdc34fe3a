//! Error types for kronrod-rs.
//!
//! A single `thiserror`-derived enum covers everything the rule generator
//! can report. Diagnostic payloads are stored as `f64` regardless of the
//! working precision, which keeps the enum non-generic and cheap to clone.

use thiserror::Error;

/// The top-level error type used throughout kronrod-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A Newton refinement exhausted its iteration budget without the step
    /// size dropping below the requested tolerance. The tolerance is
    /// unattainable at the working precision; retrying with the same inputs
    /// would retrace the same trajectory, so the caller should loosen the
    /// tolerance or switch to a higher-precision scalar type.
    #[error(
        "abscissa refinement did not converge: \
         requested tolerance {tolerance:e}, last Newton step {last_step:e}"
    )]
    ConvergenceFailure {
        /// The tolerance the caller asked for.
        tolerance: f64,
        /// The magnitude of the last Newton correction taken.
        last_step: f64,
    },

    /// The requested Gauss order was zero. The extension of an n-point
    /// Gauss rule is defined for n >= 1 only.
    #[error("invalid order {0}: the Gauss rule must have at least one point")]
    InvalidOrder(usize),
}

/// Shorthand `Result` type used throughout kronrod-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
