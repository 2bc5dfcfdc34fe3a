//! # kronrod
//!
//! Gauss-Kronrod quadrature rule generation.
//!
//! This crate is a **façade** that re-exports the public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `gk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! kronrod = "0.1"
//! ```
//!
//! ```rust
//! use kronrod::GaussKronrodRule;
//!
//! // The 15-point Kronrod extension of the 7-point Gauss rule.
//! let rule = GaussKronrodRule::<f64>::new(7, 1.0e-12).unwrap();
//! assert_eq!(rule.kronrod_size(), 15);
//! assert_eq!(rule.abscissae().len(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types: the scalar abstraction and error definitions.
pub use gk_core as core;

/// Rule generation.
pub use gk_quadrature as quadrature;

pub use gk_core::{Error, Real, Result, Scalar};
pub use gk_quadrature::GaussKronrodRule;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reexports_are_usable() {
        let rule = GaussKronrodRule::<Real>::new(3, 1.0e-12).unwrap();
        assert_eq!(rule.gauss_order(), 3);
    }
}
