//! The precision-generic scalar abstraction.
//!
//! The rule generator is written once against [`Scalar`] and instantiated
//! at whatever precision the caller selects: `f64` for native double
//! precision, or [`TwoFloat`] (double-double, roughly 31 significant
//! decimal digits) when the downstream integrator needs abscissas beyond
//! what `f64` can represent. Every comparison against zero and every
//! tolerance check in the algorithm goes through this trait, so no code
//! path assumes a particular bit width.
//!
//! Implementations must be reentrant: no hidden mutable state, only
//! one-time constants. Two rule generations on different threads may use
//! the same scalar type freely.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use twofloat::TwoFloat;

/// Scalar operations required by the rule generator.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Widen an `f64` into this type.
    fn from_f64(x: f64) -> Self;

    /// Widen a small non-negative integer (an order or loop index; always
    /// exactly representable in `f64`).
    fn from_usize(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    /// Narrow to `f64`, rounding if this type carries more precision.
    fn to_f64(self) -> f64;

    /// Additive identity.
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// Multiplicative identity.
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// The unit roundoff: the smallest representable increment above 1.
    fn epsilon() -> Self;

    /// The constant pi at this type's full precision.
    fn pi() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;
}

impl Scalar for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn epsilon() -> Self {
        f64::EPSILON
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }
}

impl Scalar for TwoFloat {
    fn from_f64(x: f64) -> Self {
        TwoFloat::from(x)
    }

    fn to_f64(self) -> f64 {
        self.into()
    }

    fn epsilon() -> Self {
        // Double-double unit roundoff, 2^-104.
        TwoFloat::from(2.0_f64.powi(-104))
    }

    fn pi() -> Self {
        // pi split across two doubles; new_add renormalizes the pair.
        TwoFloat::new_add(3.141592653589793, 1.224_646_799_147_353_2e-16)
    }

    fn abs(self) -> Self {
        TwoFloat::abs(&self)
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn sin(self) -> Self {
        self.sin()
    }
}
