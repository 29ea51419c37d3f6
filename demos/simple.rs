const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() -> Result<(), munkres::AssignmentError> {
    let mut total_cost = 0.;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<f64>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE);
        let assignment = munkres::solve(&costs)?;
        total_cost += assignment.total_cost(&costs);
    }

    println!("total: {total_cost}");
    Ok(())
}
