use crate::assignment::Assignment;
use crate::config::SolverConfig;
use crate::cost::{min_of, Cost};
use crate::error::AssignmentError;
use crate::normalize::CostMatrix;
use crate::solver::AssignmentSolver;

/// Largest side length the exhaustive search accepts (10! permutations).
pub const MAX_BRUTE_FORCE_SIZE: usize = 10;

/// Tries every permutation and keeps the first one, in lexicographic order,
/// with minimal cost.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForce<T> {
    config: SolverConfig<T>,
}

impl<T> Default for BruteForce<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl<T: Cost> BruteForce<T> {
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }
}

/// Advances `perm` to the next lexicographic permutation. Returns `false`
/// after the last one.
fn next_permutation(perm: &mut [usize]) -> bool {
    let Some(pivot) = perm.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = perm
        .iter()
        .rposition(|&v| v > perm[pivot])
        .unwrap_or(pivot + 1);
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

impl<T: Cost> AssignmentSolver<T> for BruteForce<T> {
    fn name(&self) -> &str {
        "BruteForce"
    }

    fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    fn solve_normalized(&self, costs: &CostMatrix<T>) -> Result<Assignment, AssignmentError> {
        let n = costs.size();
        if n > MAX_BRUTE_FORCE_SIZE {
            return Err(AssignmentError::TooLarge {
                size: n,
                max: MAX_BRUTE_FORCE_SIZE,
            });
        }

        let a = costs.costs();
        let (rows, cols) = (costs.rows(), costs.cols());
        let smallest = min_of(a.iter().copied()).unwrap_or_else(T::zero);

        // every permutation crosses the same number of padding cells, so only
        // real cells are summed, each shifted up from the smallest entry
        let cost_of = |perm: &[usize]| {
            perm.iter()
                .enumerate()
                .filter(|&(row, &col)| row < rows && col < cols)
                .try_fold(T::zero(), |acc, (row, &col)| {
                    a[(row, col)]
                        .checked_sub_cost(smallest)
                        .and_then(|c| acc.checked_add_cost(c))
                })
                .ok_or(AssignmentError::OverflowRisk { rows, cols })
        };

        let mut perm: Vec<usize> = (0..n).collect();
        let mut best = perm.clone();
        let mut best_cost = cost_of(&perm)?;
        while next_permutation(&mut perm) {
            let cost = cost_of(&perm)?;
            if cost < best_cost {
                best_cost = cost;
                best.copy_from_slice(&perm);
            }
        }

        if self.config.verbose {
            log::debug!(target: "munkres", "exhaustive search: best cost {best_cost} above the floor {smallest} via {best:?}");
        }

        Ok(Assignment::from_permutation(costs.rows(), costs.cols(), &best))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enumerates_permutations_in_order() {
        let mut perm = vec![0, 1, 2];
        let mut seen = vec![perm.clone()];
        while next_permutation(&mut perm) {
            seen.push(perm.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn finds_zero_cost_matching() {
        let rows = [[2, 1, 0], [0, 0, 3], [3, 0, 2]];
        let assignment = BruteForce::default().solve_rows(&rows).unwrap();
        assert_eq!(assignment.pairs().collect::<Vec<_>>(), vec![(0, 2), (1, 0), (2, 1)]);
    }

    #[test]
    fn sums_near_the_top_of_the_type() {
        let rows = [[120i8, 125, 127], [127, 121, 126], [124, 127, 122]];
        let assignment = BruteForce::default().solve_rows(&rows).unwrap();
        assert_eq!(assignment.pairs().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn refuses_large_instances() {
        let rows = vec![vec![1u32; 11]; 11];
        assert_eq!(
            BruteForce::default().solve_rows(&rows),
            Err(AssignmentError::TooLarge { size: 11, max: 10 })
        );
    }
}
