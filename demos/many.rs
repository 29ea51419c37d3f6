use munkres::{AssignmentSolver, Munkres, RecordingTrace, ShortestAugmentingPath};

const ROWS: usize = 48;
const COLS: usize = 64;
const N: usize = 100;

fn main() -> Result<(), munkres::AssignmentError> {
    let munkres = Munkres::default();
    let sap = ShortestAugmentingPath::default();
    let mut trace = RecordingTrace::new();

    let (mut munkres_total, mut sap_total) = (0., 0.);
    let mut augmentations = 0;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<f64>::new_random(ROWS, COLS);
        let normalized = munkres::CostMatrix::from_matrix(&costs, munkres.config().padding)?;

        let (assignment, statistics) = munkres.solve_traced(&normalized, &mut trace)?;
        munkres_total += assignment.total_cost(&costs);
        augmentations += statistics.augmentations;

        sap_total += sap.solve_normalized(&normalized)?.total_cost(&costs);
    }

    println!("munkres total: {munkres_total}");
    println!("sap total: {sap_total}");
    println!("augmentations: {augmentations}");
    Ok(())
}
