//! Shortest augmenting path engine with row and column potentials.
//!
//! Rows are inserted one at a time. For each new row a Dijkstra-like search
//! over reduced costs `c[i][j] - u[i] - v[j]` finds the cheapest way to free
//! a column, potentials are shifted by the search distances, and the
//! matching is rewired along the recorded predecessors. O(n³) overall.

use num_traits::{Bounded, Signed};

use crate::assignment::Assignment;
use crate::config::SolverConfig;
use crate::cost::{min_of, Cost};
use crate::error::AssignmentError;
use crate::normalize::CostMatrix;
use crate::solver::AssignmentSolver;

/// Potential-based engine. Potentials go negative, so the cost type has to
/// be signed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestAugmentingPath<T> {
    config: SolverConfig<T>,
}

impl<T> Default for ShortestAugmentingPath<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl<T> ShortestAugmentingPath<T>
where
    T: Cost + Signed + Bounded,
{
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Row assigned to each column of the square matrix.
    fn column_owners(costs: &CostMatrix<T>) -> Result<Vec<usize>, AssignmentError> {
        let n = costs.size();
        let inf = T::max_value();
        let overflow = || AssignmentError::OverflowRisk {
            rows: costs.rows(),
            cols: costs.cols(),
        };

        // shift so the smallest entry is zero and potentials start from there
        let smallest = min_of(costs.costs().iter().copied()).unwrap_or_else(T::zero);
        let mut a = costs.costs().clone();
        for entry in a.iter_mut() {
            *entry = entry.checked_sub_cost(smallest).ok_or_else(overflow)?;
        }

        // index 0 is a virtual column holding the row being inserted;
        // rows and columns are 1-based, owner 0 means free
        let mut u = vec![T::zero(); n + 1];
        let mut v = vec![T::zero(); n + 1];
        let mut owner = vec![0usize; n + 1];
        let mut way = vec![0usize; n + 1];

        for i in 1..=n {
            owner[0] = i;
            let mut j0 = 0;
            let mut minv = vec![inf; n + 1];
            let mut used = vec![false; n + 1];

            loop {
                used[j0] = true;
                let i0 = owner[j0];
                let mut delta = inf;
                let mut j1 = 0;

                for j in 1..=n {
                    if used[j] {
                        continue;
                    }
                    let cur = a[(i0 - 1, j - 1)]
                        .checked_sub_cost(u[i0])
                        .and_then(|c| c.checked_sub_cost(v[j]))
                        .ok_or_else(overflow)?;
                    if cur < minv[j] {
                        minv[j] = cur;
                        way[j] = j0;
                    }
                    if minv[j] < delta {
                        delta = minv[j];
                        j1 = j;
                    }
                }

                // every reduced cost sat at the top of the type
                if j1 == 0 {
                    return Err(overflow());
                }

                for j in 0..=n {
                    if used[j] {
                        u[owner[j]] = u[owner[j]].checked_add_cost(delta).ok_or_else(overflow)?;
                        v[j] = v[j].checked_sub_cost(delta).ok_or_else(overflow)?;
                    } else {
                        minv[j] = minv[j].checked_sub_cost(delta).ok_or_else(overflow)?;
                    }
                }

                j0 = j1;
                if owner[j0] == 0 {
                    break;
                }
            }

            // rewire along the predecessors back to the virtual column
            loop {
                let j1 = way[j0];
                owner[j0] = owner[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }

        Ok(owner)
    }
}

impl<T> AssignmentSolver<T> for ShortestAugmentingPath<T>
where
    T: Cost + Signed + Bounded,
{
    fn name(&self) -> &str {
        "ShortestAugmentingPath"
    }

    fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    fn solve_normalized(&self, costs: &CostMatrix<T>) -> Result<Assignment, AssignmentError> {
        let n = costs.size();
        let owner = Self::column_owners(costs)?;

        let mut permutation = vec![0usize; n];
        for j in 1..=n {
            permutation[owner[j] - 1] = j - 1;
        }

        if self.config.verbose {
            log::debug!(target: "munkres", "shortest augmenting path solved {n}x{n} assignment");
        }

        Ok(Assignment::from_permutation(
            costs.rows(),
            costs.cols(),
            &permutation,
        ))
    }
}
