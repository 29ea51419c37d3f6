use crate::mask::{Mark, Mask};

/// An alternating sequence of cells starting at an unmatched prime:
/// prime, star in its column, prime in that star's row, and so on, ending on
/// a prime whose column holds no star.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<(usize, usize)>,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: Vec::with_capacity(2 * n + 1),
        }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rebuilds the path from `origin`, a prime with no star in its row.
    pub(crate) fn build(&mut self, origin: (usize, usize), mask: &Mask) {
        self.cells.clear();
        self.cells.push(origin);

        let mut col = origin.1;
        while let Some(star_row) = mask.star_in_col(col) {
            self.cells.push((star_row, col));
            // a star's row is only covered after a prime was placed in it
            col = mask
                .prime_in_row(star_row)
                .expect("starred row on an alternating path holds a prime");
            self.cells.push((star_row, col));
        }
    }

    /// Unstars every star and stars every prime along the path, growing the
    /// matching by one.
    pub(crate) fn flip(&self, mask: &mut Mask) {
        for &(row, col) in &self.cells {
            match mask.get(row, col) {
                Mark::Star => mask.set(row, col, Mark::Unmarked),
                Mark::Prime => mask.set(row, col, Mark::Star),
                Mark::Unmarked => {}
            }
        }
    }
}
