use itertools::Itertools;

const SINGULAR_PIVOT: f64 = 1e-12;

/// Least squares polynomial through a set of points
///
/// x is centred and scaled before fitting, database sizes squared would otherwise swamp
/// the normal equations.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    // lowest order first, in scaled x
    coefficients: Vec<f64>,
    centre: f64,
    scale: f64,
}

impl Polynomial {
    /// fit a polynomial of `degree`, `None` when the points can't determine one
    pub fn fit(points: &[(f64, f64)], degree: usize) -> Option<Self> {
        let distinct = points.iter().map(|(x, _)| x.to_bits()).unique().count();
        if distinct < degree + 1 {
            return None;
        }

        let count = points.len() as f64;
        let centre = points.iter().map(|(x, _)| x).sum::<f64>() / count;
        let scale = points
            .iter()
            .map(|(x, _)| (x - centre).abs())
            .fold(0.0, f64::max);
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }

        // normal equations: sum(u^(i+j)) * c_j = sum(y * u^i)
        let size = degree + 1;
        let mut matrix = vec![vec![0.0; size + 1]; size];
        for (x, y) in points {
            let u = (x - centre) / scale;
            let powers = (0..2 * size - 1)
                .scan(1.0, |power, _| {
                    let current = *power;
                    *power *= u;
                    Some(current)
                })
                .collect_vec();

            for (i, row) in matrix.iter_mut().enumerate() {
                for (j, cell) in row.iter_mut().take(size).enumerate() {
                    *cell += powers[i + j];
                }
                row[size] += y * powers[i];
            }
        }

        solve(matrix).map(|coefficients| Self {
            coefficients,
            centre,
            scale,
        })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let u = (x - self.centre) / self.scale;

        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc * u + coefficient)
    }

    /// `steps` evenly spaced points of the curve between `from` and `to`, both included
    pub fn sample(&self, from: f64, to: f64, steps: usize) -> Vec<(f64, f64)> {
        if steps < 2 {
            return vec![(from, self.evaluate(from))];
        }

        let step = (to - from) / (steps - 1) as f64;
        (0..steps)
            .map(|index| {
                let x = if index + 1 == steps {
                    to
                } else {
                    from + step * index as f64
                };
                (x, self.evaluate(x))
            })
            .collect_vec()
    }
}

/// Gaussian elimination with partial pivoting on an augmented matrix
fn solve(mut matrix: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let size = matrix.len();

    for column in 0..size {
        let pivot = (column..size).max_by(|&a, &b| {
            matrix[a][column]
                .abs()
                .total_cmp(&matrix[b][column].abs())
        })?;
        if matrix[pivot][column].abs() < SINGULAR_PIVOT {
            return None;
        }
        matrix.swap(column, pivot);

        let pivot_row = matrix[column].clone();
        for row in matrix.iter_mut().skip(column + 1) {
            let factor = row[column] / pivot_row[column];
            for (cell, pivot_cell) in row.iter_mut().zip(&pivot_row).skip(column) {
                *cell -= factor * pivot_cell;
            }
        }
    }

    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let known = (row + 1..size)
            .map(|index| matrix[row][index] * solution[index])
            .sum::<f64>();
        solution[row] = (matrix[row][size] - known) / matrix[row][row];
    }

    if solution.iter().all(|value| value.is_finite()) {
        Some(solution)
    } else {
        None
    }
}
