//! Newton refinement of individual rule abscissas.
//!
//! Two refiners, one per kind of node. [`refine_kronrod_node`] drives a
//! Newton iteration on the auxiliary polynomial (evaluated by a
//! Clenshaw-style recurrence over its Chebyshev coefficients in the
//! variable `y = 4x^2 - 2`) and yields the node plus its Kronrod weight.
//! [`refine_gauss_node`] drives Newton on the Legendre polynomial itself
//! and yields the node plus both its Kronrod and Gauss weights.
//!
//! Both share the convergence policy of Piessens & Branders (1974): once a
//! Newton step falls within the requested tolerance, one further confirming
//! iteration is taken and the loop exits; a guess arriving exactly at the
//! origin counts as already confirmed. Exhausting the iteration budget
//! means the tolerance is unattainable at the working precision and
//! surfaces as [`Error::ConvergenceFailure`].

use gk_core::{Error, Result, Scalar};

/// Newton iteration budget per abscissa.
const MAX_ITERATIONS: usize = 50;

/// Refine one Kronrod-only abscissa from the initial guess `x` and compute
/// its Kronrod weight.
pub(crate) fn refine_kronrod_node<T: Scalar>(
    n: usize,
    eps: T,
    coef2: T,
    even: bool,
    b: &[T],
    mut x: T,
) -> Result<(T, T)> {
    let m = (n + 1) / 2;
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let four = T::from_f64(4.0);
    let half = T::from_f64(0.5);

    let mut converged = x == zero;
    let mut delta = zero;
    let mut fd = one;

    for _ in 0..MAX_ITERATIONS {
        // Evaluate the auxiliary polynomial and its derivative at x via the
        // coupled recurrences in y = 4x^2 - 2. The parity of n decides both
        // the derivative seed and which recurrence outputs combine into the
        // function value below.
        let yy = four * x * x - two;
        let mut b0 = zero;
        let mut b1 = zero;
        let mut b2 = b[m];
        let mut d0 = zero;
        let mut d1 = zero;
        let (mut ai, mut d2, dif) = if even {
            (T::from_usize(2 * m + 1), T::from_usize(2 * m + 1) * b[m], two)
        } else {
            (T::from_usize(m + 1), zero, one)
        };

        for k in 1..=m {
            ai = ai - dif;
            b0 = b1;
            b1 = b2;
            d0 = d1;
            d1 = d2;
            b2 = yy * b1 - b0 + b[m - k];
            let i = if even { m - k } else { m - k + 1 };
            d2 = yy * d1 - d0 + ai * b[i];
        }

        let f = if even {
            x * (b2 - b1)
        } else {
            half * (b2 - b0)
        };
        fd = if even { d2 + d1 } else { four * x * d2 };

        // Newton correction.
        delta = f / fd;
        x = x - delta;

        if converged {
            break;
        }
        if delta.abs() <= eps {
            converged = true;
        }
    }

    if !converged {
        return Err(Error::ConvergenceFailure {
            tolerance: eps.to_f64(),
            last_step: delta.abs().to_f64(),
        });
    }

    // Kronrod weight: coef2 / (f'(x) * P_n(x)), with P_n from the
    // three-term Legendre recurrence.
    let mut p0 = one;
    let mut p1 = x;
    let mut ai = zero;
    for _ in 2..=n {
        ai = ai + one;
        let p2 = ((ai + ai + one) * x * p1 - ai * p0) / (ai + one);
        p0 = p1;
        p1 = p2;
    }

    Ok((x, coef2 / (fd * p1)))
}

/// Refine one shared (Gauss) abscissa from the initial guess `x` and
/// compute both its Kronrod weight and its Gauss weight.
pub(crate) fn refine_gauss_node<T: Scalar>(
    n: usize,
    eps: T,
    coef2: T,
    even: bool,
    b: &[T],
    mut x: T,
) -> Result<(T, T, T)> {
    let m = (n + 1) / 2;
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let four = T::from_f64(4.0);

    let mut converged = x == zero;
    let mut delta = zero;

    // Final Legendre recurrence state; the weight formulas below need
    // P_{n-1}(x) and P'_n(x) from the last iteration.
    let mut p0 = one;
    let mut pd2 = one;

    for _ in 0..MAX_ITERATIONS {
        p0 = one;
        let mut p1 = x;
        let mut pd0 = zero;
        let mut pd1 = one;

        // Seed with P_1 and P'_1; for n == 1 the recurrence below never
        // runs and these are already the final values, keeping the Newton
        // step stable arbitrarily close to the origin.
        let mut p2 = p1;
        pd2 = pd1;

        let mut ai = zero;
        for _ in 2..=n {
            ai = ai + one;
            p2 = ((ai + ai + one) * x * p1 - ai * p0) / (ai + one);
            pd2 = ((ai + ai + one) * (p1 + x * pd1) - ai * pd0) / (ai + one);
            p0 = p1;
            p1 = p2;
            pd0 = pd1;
            pd1 = pd2;
        }

        // Newton correction.
        delta = p2 / pd2;
        x = x - delta;

        if converged {
            break;
        }
        if delta.abs() <= eps {
            converged = true;
        }
    }

    if !converged {
        return Err(Error::ConvergenceFailure {
            tolerance: eps.to_f64(),
            last_step: delta.abs().to_f64(),
        });
    }

    // Gauss weight: 2 / (n * P'_n(x) * P_{n-1}(x)).
    let an = T::from_usize(n);
    let w2 = two / (an * pd2 * p0);

    // Kronrod weight: the Gauss weight plus a correction from the auxiliary
    // polynomial, evaluated by the same Chebyshev recurrence as in
    // `refine_kronrod_node`. The parity branch selects which recurrence
    // states enter the correction; Piessens & Branders give the two cases
    // as separate formulas.
    let yy = four * x * x - two;
    let mut p0 = zero;
    let mut p1 = zero;
    let mut p2 = b[m];
    for k in 1..=m {
        p0 = p1;
        p1 = p2;
        p2 = yy * p1 - p0 + b[m - k];
    }

    let w1 = if even {
        w2 + coef2 / (pd2 * x * (p2 - p1))
    } else {
        w2 + two * coef2 / (pd2 * (p2 - p0))
    };

    Ok((x, w1, w2))
}
