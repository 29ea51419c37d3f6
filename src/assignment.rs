use nalgebra::{DMatrix, Dim, Matrix, RawStorage};

use crate::cost::Cost;

/// A row-to-column matching over the original, unpadded shape.
///
/// Every row and column appears at most once. Rows (or columns) that were
/// only matched against padding are left unmatched, so a `rows x cols`
/// result has exactly `min(rows, cols)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    rows: usize,
    cols: usize,
    row_to_col: Vec<Option<usize>>,
}

impl Assignment {
    pub(crate) fn new(rows: usize, cols: usize, row_to_col: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(row_to_col.len(), rows);
        Self {
            rows,
            cols,
            row_to_col,
        }
    }

    /// Builds an assignment from a square `row -> column` permutation,
    /// truncated to `rows x cols`.
    pub(crate) fn from_permutation(rows: usize, cols: usize, permutation: &[usize]) -> Self {
        let row_to_col = permutation
            .iter()
            .take(rows)
            .map(|&col| (col < cols).then_some(col))
            .collect();
        Self::new(rows, cols, row_to_col)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.row_to_col.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_for(&self, row: usize) -> Option<usize> {
        self.row_to_col.get(row).copied().flatten()
    }

    pub fn row_for(&self, col: usize) -> Option<usize> {
        self.row_to_col.iter().position(|&c| c == Some(col))
    }

    /// Matched `(row, column)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }

    /// The assignment as a 0/1 matrix of the original shape.
    pub fn to_mask(&self) -> DMatrix<u8> {
        let mut mask = DMatrix::zeros(self.rows, self.cols);
        self.pairs().for_each(|a| mask[a] = 1);
        mask
    }

    /// Sum of `costs` over the matched pairs.
    pub fn total_cost<T, R, C, S>(&self, costs: &Matrix<T, R, C, S>) -> T
    where
        T: Cost,
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        self.pairs().fold(T::zero(), |acc, a| acc + costs[a])
    }
}
