//! Binomial coefficients for the Bernstein basis.
//!
//! Uses the multiplicative formula `C(i, n) = Π_{k=1}^{m} (n - m + k) / k` with
//! `m = min(i, n - i)`. Unlike the factorial ratio `n! / (i! (n-i)!)` no intermediate
//! value exceeds the final result by more than a factor of `n`, so the coefficients stay
//! exact for every degree where they are representable.

/// The binomial coefficient "n choose i"; `0` when `i > n`
pub fn binomial(i: usize, n: usize) -> f64 {
    if i > n {
        return 0.0;
    }

    let m = i.min(n - i);
    (1..=m).fold(1.0, |acc, k| acc * (n - m + k) as f64 / k as f64)
}

/// Natural logarithm of `C(i, n)`, finite for every `i <= n`
pub fn ln_binomial(i: usize, n: usize) -> f64 {
    if i > n {
        return f64::NEG_INFINITY;
    }

    let m = i.min(n - i);
    (1..=m).map(|k| ((n - m + k) as f64 / k as f64).ln()).sum()
}

/// Bernstein basis polynomial `C(i, n) t^i (1-t)^(n-i)` for `t` in `[0, 1]`.
///
/// Past the degree where `C(i, n)` overflows the term is computed in log space.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }

    let t1 = 1.0 - t;
    let coefficient = binomial(i, n);
    if coefficient.is_finite() {
        return coefficient * t.powi(i as i32) * t1.powi((n - i) as i32);
    }

    // a vanishing power zeroes the term whatever the coefficient
    if (i > 0 && t == 0.0) || (i < n && t1 == 0.0) {
        return 0.0;
    }
    (ln_binomial(i, n) + i as f64 * t.ln() + (n - i) as f64 * t1.ln()).exp()
}
