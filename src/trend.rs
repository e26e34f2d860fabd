use log::debug;

#[derive(Debug, PartialEq, Clone)]
pub struct Polynomial {
    // Coefficients in increasing degree, over the mapped variable
    // t = (x - shift) / scale.
    coef: Vec<f64>,
    shift: f64,
    scale: f64,
}

impl Polynomial {
    #[allow(dead_code)]
    pub fn degree(&self) -> usize {
        self.coef.len() - 1
    }

    pub fn eval(&self, x: f64) -> f64 {
        let t = (x - self.shift) / self.scale;
        // Horner.
        self.coef.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    // Coefficients over x itself, lowest degree first.
    #[allow(dead_code)]
    pub fn coefficients(&self) -> Vec<f64> {
        let n = self.coef.len();
        let mut out = vec![0.0; n];
        // Expand sum c_k ((x - s) / h)^k binomially.
        for (k, c) in self.coef.iter().enumerate() {
            let ck = c / self.scale.powi(k as i32);
            for j in 0..=k {
                out[j] += ck * binomial(k, j) * (-self.shift).powi((k - j) as i32);
            }
        }
        out
    }
}

fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

// None when too few distinct x values remain once NaNs are dropped.
pub fn polyfit(points: &[(f64, f64)], degree: usize) -> Option<Polynomial> {
    let pts: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let n = degree + 1;
    if pts.len() < n {
        return None;
    }

    // Map x onto [-1, 1] so the normal equations stay well conditioned.
    let min = pts.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max = pts.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let shift = (max + min) / 2.0;
    let scale = if max > min { (max - min) / 2.0 } else { 1.0 };

    // Normal equations: sum t^(i+j) * c_j = sum y * t^i.
    let mut a = vec![vec![0.0; n + 1]; n];
    for &(x, y) in &pts {
        let t = (x - shift) / scale;
        let powers: Vec<f64> = (0..2 * n).map(|p| t.powi(p as i32)).collect();
        for i in 0..n {
            for j in 0..n {
                a[i][j] += powers[i + j];
            }
            a[i][n] += y * powers[i];
        }
    }

    let coef = solve(a)?;
    debug!("degree {} fit over {} points: {:?}", degree, pts.len(), coef);

    Some(Polynomial { coef, shift, scale })
}

// Gaussian elimination with partial pivoting on an augmented n x (n + 1)
// matrix.
fn solve(mut a: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let n = a.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);

        for row in col + 1..n {
            let f = a[row][col] / a[col][col];
            for k in col..=n {
                a[row][k] -= f * a[col][k];
            }
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let s: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (a[row][n] - s) / a[row][row];
    }

    Some(x)
}
