//! Gauss-Kronrod rule assembly.
//!
//! [`GaussKronrodRule::new`] derives the (2n+1)-point Kronrod extension of
//! the n-point Gauss-Legendre rule on [-1, 1]. The rule is symmetric about
//! the origin, so only the n+1 non-negative abscissas are computed and
//! stored, in strictly decreasing order; the last one is the origin
//! itself. Each abscissa carries a Kronrod weight, and those shared with
//! the underlying Gauss rule additionally carry a Gauss weight (the rest
//! have Gauss weight exactly zero). Integrators estimate error by
//! comparing the Gauss and Kronrod sums over the same integrand samples.

use gk_core::{Error, Real, Result, Scalar};

use crate::chebyshev::chebyshev_coefficients;
use crate::refine::{refine_gauss_node, refine_kronrod_node};

/// A point on the unit circle, advanced by a fixed rotation per refined
/// abscissa to produce the next trigonometric initial guess.
struct Rotation<T> {
    /// Cosine-like component; the raw next guess before correction.
    x1: T,
    /// Sine-like component.
    bb: T,
    /// Sine of the fixed step angle.
    s: T,
    /// Cosine of the fixed step angle.
    c: T,
}

impl<T: Scalar> Rotation<T> {
    /// Rotate one step: (x1, bb) <- (x1 c - bb s, x1 s + bb c).
    fn advance(&mut self) {
        let y = self.x1;
        self.x1 = y * self.c - self.bb * self.s;
        self.bb = y * self.s + self.bb * self.c;
    }
}

/// A Gauss-Kronrod quadrature rule on [-1, 1].
///
/// Holds the non-negative half of the symmetric point set: n+1 abscissas
/// in decreasing order with their Kronrod and Gauss weights, index-aligned.
#[derive(Debug, Clone)]
pub struct GaussKronrodRule<T: Scalar = Real> {
    x: Vec<T>,
    w1: Vec<T>,
    w2: Vec<T>,
}

impl<T: Scalar> GaussKronrodRule<T> {
    /// Compute the Kronrod extension of the `n`-point Gauss rule, refining
    /// every abscissa until the Newton step falls below `eps`.
    ///
    /// The computation is deterministic and stateless: the same `(n, eps)`
    /// at the same scalar type always produces identical output, and
    /// independent calls may run concurrently.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOrder`] if `n == 0`;
    /// [`Error::ConvergenceFailure`] if `eps` is unattainable at this
    /// scalar type's precision, in which case no partial result is
    /// returned.
    pub fn new(n: usize, eps: T) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidOrder(n));
        }

        let m = (n + 1) / 2;
        let even = 2 * m == n;

        let one = T::one();
        let two = T::from_f64(2.0);
        let coeffs = chebyshev_coefficients::<T>(n);

        let mut x = vec![T::zero(); n + 1];
        let mut w1 = vec![T::zero(); n + 1];
        let mut w2 = vec![T::zero(); n + 1];

        // Initial rotation state from the seed angle pi / (2(2n+1)); each
        // advance() steps twice that angle around the unit circle, walking
        // x1 through the cosines that approximate successive abscissas.
        let an = T::from_usize(n);
        let bb = (T::pi() / (two * (an + an + one))).sin();
        let x1 = (one - bb * bb).sqrt();
        let s = two * bb * x1;
        let c = (one - s * s).sqrt();
        let mut rot = Rotation { x1, bb, s, c };

        // Correction for the asymptotic error of the trigonometric guess.
        let coef = one - (one - one / an) / (T::from_f64(8.0) * an * an);
        let mut xx = coef * rot.x1;

        // Slots fill pairwise: a Kronrod-only node, then a shared Gauss
        // node, walking inward from the largest abscissa.
        let mut k = 1;
        while k <= n {
            let (node, wk) = refine_kronrod_node(n, eps, coeffs.coef2, even, &coeffs.b, xx)?;
            x[k - 1] = node;
            w1[k - 1] = wk;
            w2[k - 1] = T::zero();

            rot.advance();
            // The innermost Gauss node of an odd-order rule is the origin
            // exactly; do not let the rotation approximate it.
            xx = if k == n { T::zero() } else { coef * rot.x1 };

            let (node, wk, wg) = refine_gauss_node(n, eps, coeffs.coef2, even, &coeffs.b, xx)?;
            x[k] = node;
            w1[k] = wk;
            w2[k] = wg;

            rot.advance();
            xx = coef * rot.x1;
            k += 2;
        }

        // An even-order rule has one Kronrod node left over: the origin.
        if even {
            let (node, wk) =
                refine_kronrod_node(n, eps, coeffs.coef2, even, &coeffs.b, T::zero())?;
            x[n] = node;
            w1[n] = wk;
            w2[n] = T::zero();
        }

        Ok(Self { x, w1, w2 })
    }

    /// Order of the underlying Gauss rule.
    pub fn gauss_order(&self) -> usize {
        self.x.len() - 1
    }

    /// Total number of points in the full symmetric Kronrod rule, 2n+1.
    pub fn kronrod_size(&self) -> usize {
        2 * self.gauss_order() + 1
    }

    /// The non-negative abscissas, in strictly decreasing order; the last
    /// entry is the origin.
    pub fn abscissae(&self) -> &[T] {
        &self.x
    }

    /// Kronrod weights, aligned with [`abscissae`](Self::abscissae).
    pub fn kronrod_weights(&self) -> &[T] {
        &self.w1
    }

    /// Gauss weights, aligned with [`abscissae`](Self::abscissae); exactly
    /// zero at abscissas the Gauss rule does not share.
    pub fn gauss_weights(&self) -> &[T] {
        &self.w2
    }

    /// Consume the rule, yielding `(abscissae, kronrod weights, gauss
    /// weights)` for callers that serialize or repackage the triple.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.x, self.w1, self.w2)
    }
}
