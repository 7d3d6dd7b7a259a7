//! Degree-1 least-squares trend fit.
//!
//! The forecaster fits a straight line to `(month_index, monthly_sales_sum)`
//! pairs where the month index is a 0-based sequential integer:
//!
//! ```text
//! minimize Σ (y_i - (slope · i + intercept))^2
//! ```
//!
//! Implementation choices:
//! - We solve the 2-column ordinary least-squares problem with SVD, which
//!   stays robust even when the design matrix is tall (many months, two
//!   parameters). (Nalgebra's `QR::solve` is intended for square systems and
//!   will panic for non-square matrices.)
//! - Because the parameter dimension is tiny, SVD performance is irrelevant
//!   for dashboard-sized histories.

use nalgebra::{DMatrix, DVector};

/// Fitted line parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Evaluate the fitted line at a (possibly future) sequential index.
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}

/// Fit `y ≈ slope · i + intercept` over `i = 0..ys.len()`.
///
/// Returns `None` when fewer than two observations are given, when any
/// observation is non-finite, or when the system is too ill-conditioned to
/// solve robustly.
pub fn fit_trend_line(ys: &[f64]) -> Option<TrendLine> {
    let n = ys.len();
    if n < 2 {
        return None;
    }
    if ys.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut x = DMatrix::<f64>::zeros(n, 2);
    let mut y = DVector::<f64>::zeros(n);
    for i in 0..n {
        x[(i, 0)] = 1.0;
        x[(i, 1)] = i as f64;
        y[i] = ys[i];
    }

    let beta = solve_least_squares(&x, &y)?;
    Some(TrendLine {
        slope: beta[1],
        intercept: beta[0],
    })
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exact_line() {
        // y = 100 + 10i for i = 0..12 — an exact fit.
        let ys: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
        let line = fit_trend_line(&ys).unwrap();
        assert!((line.slope - 10.0).abs() < 1e-9);
        assert!((line.intercept - 100.0).abs() < 1e-9);
        assert!((line.value_at(12) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn fits_flat_series() {
        let ys = [500.0, 500.0, 500.0, 500.0];
        let line = fit_trend_line(&ys).unwrap();
        assert!(line.slope.abs() < 1e-9);
        assert!((line.intercept - 500.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(fit_trend_line(&[]).is_none());
        assert!(fit_trend_line(&[1.0]).is_none());
        assert!(fit_trend_line(&[1.0, f64::NAN, 3.0]).is_none());
    }
}
