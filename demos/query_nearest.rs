//! Find the nearest point to a query location.
use kdtree2d::prelude::*;

fn main() {
    let tree = KdTree::build(&[
        Point::new(0.5, 0.5),
        Point::new(3.5, 3.5),
        Point::new(5.5, 5.5),
    ])
    .unwrap();

    if let Some(point) = tree.query_nearest(2.0, 2.0) {
        println!("Nearest point: ({}, {})", point.x, point.y);
    }
}
