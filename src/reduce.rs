use nalgebra::DMatrix;

use crate::cost::{min_of, Cost};
use crate::error::AssignmentError;
use crate::mask::Covers;

/// Subtracts each row's minimum from the row, then each column's minimum from
/// the column. Afterwards every row and column holds a zero and no entry is
/// negative.
pub fn reduce<T: Cost>(costs: &mut DMatrix<T>) {
    // subtract minimum value from each respective row
    costs.row_iter_mut().for_each(|mut r| {
        if let Some(min) = min_of(r.iter().copied()) {
            r.iter_mut().for_each(|v| *v -= min);
        }
    });

    // subtract minimum value from each respective col
    costs.column_iter_mut().for_each(|mut c| {
        if let Some(min) = min_of(c.iter().copied()) {
            c.iter_mut().for_each(|v| *v -= min);
        }
    });
}

/// Smallest entry whose row and column are both uncovered.
pub fn min_uncovered<T: Cost>(costs: &DMatrix<T>, covers: &Covers) -> Option<T> {
    let (h, w) = costs.shape();
    min_of((0..h).flat_map(|row| {
        (0..w)
            .filter(move |&col| covers.is_uncovered(row, col))
            .map(move |col| costs[(row, col)])
    }))
}

/// Adds `min` to every covered row and subtracts it from every uncovered
/// column.
///
/// Only the net change is applied: cells in a covered row and covered column
/// grow by `min`, cells in an uncovered row and uncovered column shrink by
/// `min`, everything else is untouched. Since `min` is the smallest uncovered
/// entry nothing drops below zero. A cell that would grow past the top of the
/// cost type yields `OverflowRisk`, and the matrix is left partially updated.
pub fn adjust_dual<T: Cost>(
    costs: &mut DMatrix<T>,
    covers: &Covers,
    min: T,
) -> Result<(), AssignmentError> {
    let (h, w) = costs.shape();
    for col in 0..w {
        let col_covered = covers.col(col);
        for row in 0..h {
            match (covers.row(row), col_covered) {
                (true, true) => {
                    costs[(row, col)] = costs[(row, col)]
                        .checked_add_cost(min)
                        .ok_or(AssignmentError::OverflowRisk { rows: h, cols: w })?;
                }
                (false, false) => costs[(row, col)] -= min,
                _ => {}
            }
        }
    }
    Ok(())
}
