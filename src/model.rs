use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// A fitted linear regression: one coefficient per feature plus an intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Fits an ordinary least squares regression of `targets` on `features`
    /// with an intercept, no regularization.
    ///
    /// The fit solves the normal equations `(XᵀX)β = Xᵀy`. They are always
    /// consistent, so perfectly collinear feature columns do not abort the
    /// fit: their free coefficients are pinned to zero and the result is
    /// still a least-squares minimizer. The computation is deterministic for
    /// identical input.
    pub fn fit(features: ArrayView2<f64>, targets: ArrayView1<f64>) -> Self {
        let n = features.nrows();
        let k = features.ncols();

        // Design matrix [X | 1], intercept column last.
        let mut design = Array2::ones((n, k + 1));
        design
            .slice_mut(ndarray::s![.., ..k])
            .assign(&features);

        let ata = design.t().dot(&design);
        let atb = design.t().dot(&targets);
        let beta = solve_consistent(ata, atb);

        let (coefficients, intercept) = split_params(beta);
        Self {
            coefficients,
            intercept,
        }
    }

    /// Predicted value for a single feature row, in training column order.
    pub fn predict_one(&self, features: ArrayView1<f64>) -> f64 {
        self.coefficients.dot(&features) + self.intercept
    }

    /// Predicted values for every row of a feature matrix.
    pub fn predict(&self, features: ArrayView2<f64>) -> Array1<f64> {
        features.dot(&self.coefficients) + self.intercept
    }
}

fn split_params(beta: Array1<f64>) -> (Array1<f64>, f64) {
    let k = beta.len() - 1;
    let intercept = beta[k];
    let mut beta = beta;
    beta.remove_index(Axis(0), k);
    (beta, intercept)
}

/// Solves `a x = b` by Gauss-Jordan elimination with partial pivoting,
/// assuming the system is consistent (which normal equations always are).
/// Columns without a usable pivot are free variables and get `x = 0`.
fn solve_consistent(mut a: Array2<f64>, mut b: Array1<f64>) -> Array1<f64> {
    let n = b.len();
    let scale = a.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let tol = 1e-8 * scale.max(1.0);

    let mut pivot_row = vec![None; n];
    let mut next = 0;
    for col in 0..n {
        if next == n {
            break;
        }
        let best = (next..n)
            .max_by(|&r, &s| a[[r, col]].abs().total_cmp(&a[[s, col]].abs()))
            .unwrap_or(next);
        if a[[best, col]].abs() <= tol {
            continue;
        }
        if best != next {
            for c in 0..n {
                a.swap([best, c], [next, c]);
            }
            b.swap(best, next);
        }

        let pivot = a[[next, col]];
        for c in 0..n {
            a[[next, c]] /= pivot;
        }
        b[next] /= pivot;

        for row in 0..n {
            if row == next {
                continue;
            }
            let factor = a[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for c in 0..n {
                let v = a[[next, c]];
                a[[row, c]] -= factor * v;
            }
            b[row] -= factor * b[next];
        }

        pivot_row[col] = Some(next);
        next += 1;
    }

    // After full reduction each pivot row carries only its pivot column and
    // free columns; with free variables at zero the solution reads off b.
    let mut x = Array1::zeros(n);
    for col in 0..n {
        if let Some(row) = pivot_row[col] {
            x[col] = b[row];
        }
    }
    x
}

/// Training-set goodness-of-fit diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    pub mse: f64,
    pub r_squared: f64,
}

impl FitMetrics {
    /// Evaluates a model over a feature matrix and its targets.
    pub fn evaluate(
        model: &LinearModel,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Self {
        let predicted = model.predict(features);
        let residuals = &targets.to_owned() - &predicted;
        let n = targets.len() as f64;

        let ss_res = residuals.iter().map(|r| r * r).sum::<f64>();
        let mse = ss_res / n;

        let mean = targets.sum() / n;
        let ss_tot = targets.iter().map(|y| (y - mean) * (y - mean)).sum::<f64>();
        let r_squared = if ss_tot == 0.0 {
            // Constant targets: the elimination leaves residuals that are
            // zero up to floating-point noise, so compare against the target
            // scale instead of exact zero.
            let scale = targets.iter().map(|y| y * y).sum::<f64>().max(1.0);
            if ss_res <= 1e-12 * scale {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Self { mse, r_squared }
    }
}
