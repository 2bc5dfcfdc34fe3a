//! Chebyshev coefficients of the auxiliary polynomial.
//!
//! The Kronrod abscissas are the roots of a polynomial orthogonal to all
//! lower-degree polynomials with respect to the Legendre weight times the
//! degree-n Legendre polynomial (Piessens & Branders 1974). Expanding that
//! polynomial in the Chebyshev basis keeps the root-finding recurrences in
//! `refine` numerically stable; this module computes the expansion
//! coefficients once per rule.

use gk_core::Scalar;

/// Chebyshev expansion of the auxiliary polynomial, plus the weight
/// normalization constant, computed once per rule generation.
pub(crate) struct Coefficients<T> {
    /// Coefficients `b[0..=m]` with `m = (n + 1) / 2`; `b[m]` is fixed at 1.
    pub b: Vec<T>,
    /// Weight scale `2/(2n+1) * prod_{i=1..n} 4i/(n+i)`; always positive.
    pub coef2: T,
}

/// Compute the Chebyshev coefficients for a Gauss order `n >= 1`.
pub(crate) fn chebyshev_coefficients<T: Scalar>(n: usize) -> Coefficients<T> {
    let m = (n + 1) / 2;

    let one = T::one();
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    let an = T::from_usize(n);

    let mut b = vec![T::zero(); m + 1];
    let mut tau = vec![T::zero(); m];

    tau[0] = (an + two) / (an + an + three);
    b[m - 1] = tau[0] - one;

    // Each tau[l] follows from tau[l-1] by a rational three-term recurrence
    // in ak = n + 2l, and each new b entry accumulates the full tau prefix
    // against the b entries already filled above it (triangular
    // back-substitution, O(m^2)).
    let mut ak = an;
    for l in 1..m {
        ak = ak + two;
        tau[l] = ((ak - one) * ak - an * (an + one)) * (ak + two) * tau[l - 1]
            / (ak * ((ak + three) * (ak + two) - an * (an + one)));
        b[m - l - 1] = tau[l];
        for ll in 1..=l {
            b[m - l - 1] = b[m - l - 1] + tau[ll - 1] * b[m - l + ll - 1];
        }
    }
    b[m] = one;

    let mut coef2 = two / T::from_usize(2 * n + 1);
    for i in 1..=n {
        coef2 = coef2 * T::from_f64(4.0) * T::from_usize(i) / T::from_usize(n + i);
    }

    Coefficients { b, coef2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn leading_coefficient_is_one() {
        for n in 1..=20 {
            let c = chebyshev_coefficients::<f64>(n);
            assert_eq!(c.b.len(), (n + 1) / 2 + 1);
            assert_eq!(*c.b.last().unwrap(), 1.0);
        }
    }

    #[test]
    fn coef2_is_positive() {
        for n in 1..=40 {
            let c = chebyshev_coefficients::<f64>(n);
            assert!(c.coef2 > 0.0, "coef2 = {} at n = {n}", c.coef2);
        }
    }

    #[test]
    fn order_one_closed_form() {
        // m = 1: tau[0] = 3/5, b = [-2/5, 1], coef2 = 2/3 * 4/2 = 4/3.
        let c = chebyshev_coefficients::<f64>(1);
        assert_abs_diff_eq!(c.b[0], -0.4, epsilon = 1e-15);
        assert_abs_diff_eq!(c.b[1], 1.0, epsilon = 0.0);
        assert_abs_diff_eq!(c.coef2, 4.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn order_two_closed_form() {
        // m = 1: tau[0] = 4/7, b = [-3/7, 1], coef2 = 2/5 * 4/3 * 8/4 = 16/15.
        let c = chebyshev_coefficients::<f64>(2);
        assert_abs_diff_eq!(c.b[0], -3.0 / 7.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.coef2, 16.0 / 15.0, epsilon = 1e-15);
    }

    #[test]
    fn order_three_closed_form() {
        // m = 2: tau = [5/9, 14/99], b[1] = -4/9,
        // b[0] = 14/99 + (5/9)(-4/9) = -94/891.
        let c = chebyshev_coefficients::<f64>(3);
        assert_abs_diff_eq!(c.b[1], -4.0 / 9.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.b[0], -94.0 / 891.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.coef2, 2.0 / 7.0 * 1.6 * 2.0, epsilon = 1e-15);
    }
}
