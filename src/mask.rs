use nalgebra::DMatrix;

/// State of a single cell of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unmarked,
    /// A zero that is part of the current matching.
    Star,
    /// A zero tentatively chosen while looking for an augmenting path.
    Prime,
}

/// Square grid of marks. Holds at most one star per row and per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    marks: DMatrix<Mark>,
}

impl Mask {
    pub fn new(n: usize) -> Self {
        Self {
            marks: DMatrix::from_element(n, n, Mark::Unmarked),
        }
    }

    pub fn size(&self) -> usize {
        self.marks.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.marks[(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.marks[(row, col)] = mark;
    }

    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        self.marks.row(row).iter().position(|&m| m == Mark::Star)
    }

    pub fn star_in_col(&self, col: usize) -> Option<usize> {
        self.marks.column(col).iter().position(|&m| m == Mark::Star)
    }

    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        self.marks.row(row).iter().position(|&m| m == Mark::Prime)
    }

    pub fn star_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Star).count()
    }

    pub(crate) fn erase_primes(&mut self) {
        self.marks.iter_mut().for_each(|m| {
            if *m == Mark::Prime {
                *m = Mark::Unmarked;
            }
        });
    }

    /// Column of the star in every row, restricted to the top-left
    /// `rows x cols` block.
    pub(crate) fn starred_columns(&self, rows: usize, cols: usize) -> Vec<Option<usize>> {
        (0..rows)
            .map(|row| self.star_in_row(row).filter(|&col| col < cols))
            .collect()
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.marks.row_iter() {
            let line: String = row
                .iter()
                .map(|m| match m {
                    Mark::Unmarked => '.',
                    Mark::Star => '*',
                    Mark::Prime => '\'',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Row and column cover flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Covers {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Covers {
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![false; n],
            cols: vec![false; n],
        }
    }

    #[inline]
    pub fn row(&self, row: usize) -> bool {
        self.rows[row]
    }

    #[inline]
    pub fn col(&self, col: usize) -> bool {
        self.cols[col]
    }

    #[inline]
    pub fn is_uncovered(&self, row: usize, col: usize) -> bool {
        !self.rows[row] && !self.cols[col]
    }

    pub(crate) fn cover_row(&mut self, row: usize) {
        self.rows[row] = true;
    }

    pub(crate) fn cover_col(&mut self, col: usize) {
        self.cols[col] = true;
    }

    pub(crate) fn uncover_col(&mut self, col: usize) {
        self.cols[col] = false;
    }

    pub fn covered_cols(&self) -> usize {
        self.cols.iter().filter(|&&c| c).count()
    }

    pub(crate) fn clear(&mut self) {
        self.rows.fill(false);
        self.cols.fill(false);
    }
}
