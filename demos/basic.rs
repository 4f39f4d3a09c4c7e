//! Basic example of using the maze engine

use maze_core::{Maze, Solver};

fn main() {
    let rows = [
        "##########",
        "E   #    #",
        "# # # ## #",
        "# #   #  #",
        "# ##### ##",
        "#     #  S",
        "##########",
    ];

    println!("Building a {}x{} maze...\n", rows.len(), rows[0].len());
    let mut maze = match Maze::new(rows.len(), rows[0].len(), &rows) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Invalid maze: {}", e);
            return;
        }
    };
    println!("{}\n", maze);

    // Count the steps as they happen
    let mut steps = 0usize;
    let mut count_steps = |_: &Maze| steps += 1;

    let mut solver = match Solver::with_observer(&mut maze, &mut count_steps) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Cannot start solver: {}", e);
            return;
        }
    };

    match solver.solve() {
        Ok(true) => {
            println!("Path found ({} cells):", solver.path().len());
            let path: Vec<String> = solver.path().iter().map(|p| p.to_string()).collect();
            println!("{}\n", path.join(" -> "));
        }
        Ok(false) => println!("No path.\n"),
        Err(e) => eprintln!("Solver failed: {}", e),
    }

    let stats = solver.stats();
    println!(
        "Advances: {}, backtracks: {}, deepest path: {}",
        stats.advances, stats.backtracks, stats.max_depth
    );
    drop(solver);

    println!("Observer notifications: {}\n", steps);
    println!("{}", maze);
}
