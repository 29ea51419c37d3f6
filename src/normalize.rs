use nalgebra::{DMatrix, Dim, Matrix, RawStorage};

use crate::config::Padding;
use crate::cost::{max_of, min_of, Cost};
use crate::error::{AssignmentError, InputError};

/// A validated, square cost matrix together with the shape of the input it
/// was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<T: Cost> {
    costs: DMatrix<T>,
    rows: usize,
    cols: usize,
    padding: Option<T>,
}

impl<T: Cost> CostMatrix<T> {
    /// Builds a cost matrix from a slice of rows, the only input form that can
    /// be jagged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R], padding: Padding<T>) -> Result<Self, AssignmentError> {
        let first = rows.first().ok_or(InputError::Empty)?;
        let cols = first.as_ref().len();

        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.is_empty() {
                return Err(InputError::EmptyRow { row }.into());
            }
            if entries.len() != cols {
                return Err(InputError::Jagged {
                    row,
                    expected: cols,
                    found: entries.len(),
                }
                .into());
            }
        }

        let real = DMatrix::from_fn(rows.len(), cols, |r, c| rows[r].as_ref()[c]);
        Self::from_real(real, padding)
    }

    /// Builds a cost matrix from any nalgebra matrix.
    pub fn from_matrix<R, C, S>(
        costs: &Matrix<T, R, C, S>,
        padding: Padding<T>,
    ) -> Result<Self, AssignmentError>
    where
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        let (rows, cols) = costs.shape();
        if rows == 0 {
            return Err(InputError::Empty.into());
        }
        if cols == 0 {
            return Err(InputError::EmptyRow { row: 0 }.into());
        }

        let real = DMatrix::from_fn(rows, cols, |r, c| costs[(r, c)]);
        Self::from_real(real, padding)
    }

    fn from_real(real: DMatrix<T>, padding: Padding<T>) -> Result<Self, AssignmentError> {
        let (rows, cols) = real.shape();

        // column-major storage, so walk by column to report the first offender
        for col in 0..cols {
            for row in 0..rows {
                if !real[(row, col)].is_finite_cost() {
                    return Err(InputError::NonFinite { row, col }.into());
                }
            }
        }

        let smallest = min_of(real.iter().copied()).unwrap_or_else(T::zero);
        let largest = max_of(real.iter().copied()).unwrap_or_else(T::zero);
        let padding = if rows == cols {
            None
        } else {
            Some(match padding {
                Padding::Derived => derived_padding(largest, rows, cols)?,
                Padding::Fixed(value) => {
                    if !value.is_finite_cost() || value <= largest {
                        return Err(AssignmentError::PaddingTooSmall {
                            padding: value.to_string(),
                            largest: largest.to_string(),
                        });
                    }
                    value
                }
            })
        };
        check_headroom(smallest, largest, padding, rows, cols)?;

        let Some(value) = padding else {
            return Ok(Self {
                costs: real,
                rows,
                cols,
                padding: None,
            });
        };

        let n = rows.max(cols);
        log::debug!(
            target: "munkres",
            "padding {rows}x{cols} cost matrix to {n}x{n} with {value}"
        );

        let mut costs = DMatrix::from_element(n, n, value);
        costs.view_mut((0, 0), (rows, cols)).copy_from(&real);

        Ok(Self {
            costs,
            rows,
            cols,
            padding: Some(value),
        })
    }

    /// Side length of the square matrix.
    pub fn size(&self) -> usize {
        self.costs.nrows()
    }

    /// Number of rows in the original input.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the original input.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The padding value, if the input had to be padded.
    pub fn padding(&self) -> Option<T> {
        self.padding
    }

    pub fn costs(&self) -> &DMatrix<T> {
        &self.costs
    }

    pub fn into_square(self) -> DMatrix<T> {
        self.costs
    }
}

/// Rejects matrices whose values leave no room for the solver's arithmetic.
///
/// Reduction subtracts row minima from every entry, padding included, so
/// `top - smallest` has to fit. Dual updates then raise doubly covered
/// entries, by at most the real span per line of the matrix.
fn check_headroom<T: Cost>(
    smallest: T,
    largest: T,
    padding: Option<T>,
    rows: usize,
    cols: usize,
) -> Result<(), AssignmentError> {
    let overflow = || AssignmentError::OverflowRisk { rows, cols };
    let top = match padding {
        Some(value) if value > largest => value,
        _ => largest,
    };
    let full = top.checked_sub_cost(smallest).ok_or_else(overflow)?;
    let span = largest.checked_sub_cost(smallest).ok_or_else(overflow)?;
    let lines = <T as num_traits::NumCast>::from(rows.max(cols)).ok_or_else(overflow)?;

    span.checked_mul_cost(lines)
        .and_then(|growth| full.checked_add_cost(growth))
        .ok_or_else(overflow)?;
    Ok(())
}

/// `max(largest, 0) * (rows * cols) + 1`, which is above any single real
/// cost and above the sum of all non-negative real costs.
fn derived_padding<T: Cost>(largest: T, rows: usize, cols: usize) -> Result<T, AssignmentError> {
    let overflow = AssignmentError::OverflowRisk { rows, cols };
    let upper = if largest > T::zero() { largest } else { T::zero() };
    let cells = rows
        .checked_mul(cols)
        .and_then(<T as num_traits::NumCast>::from)
        .ok_or_else(|| overflow.clone())?;

    upper
        .checked_mul_cost(cells)
        .and_then(|v| v.checked_add_cost(T::one()))
        .ok_or(overflow)
}
