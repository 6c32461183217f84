//! Show how many points a pruned search actually examines.
use kdtree2d::prelude::*;

fn main() {
    // 32x32 grid, 1024 points
    let mut points = Vec::new();
    for i in 0..32 {
        for j in 0..32 {
            points.push(Point::new(f64::from(i), f64::from(j)));
        }
    }
    let tree = KdTree::build(&points).unwrap();

    let mut visited = Vec::new();
    let nearest = tree.query_nearest_traced(17.3, 9.8, &mut visited);

    println!("Nearest point: {nearest:?}");
    println!("Visited {} of {} points", visited.len(), tree.len());
}
