//! # gk-quadrature
//!
//! Gauss-Kronrod quadrature rule generation on [-1, 1].
//!
//! Given a Gauss order n and a tolerance, [`GaussKronrodRule::new`]
//! computes the n+1 non-negative abscissas of the (2n+1)-point Kronrod
//! extension together with both weight sets, by the method of Piessens &
//! Branders (1974): Chebyshev expansion of the auxiliary polynomial,
//! trigonometric initial guesses, and per-abscissa Newton refinement. The
//! working precision is chosen by the scalar type; see
//! [`gk_core::Scalar`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

mod chebyshev;
mod refine;

/// Rule assembly and the public rule type.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use gk_core::{Error, Real, Result, Scalar};
pub use rule::GaussKronrodRule;
