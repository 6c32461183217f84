//! Find the K nearest points to a query location.
use kdtree2d::prelude::*;

fn main() {
    let tree = KdTree::build(&[
        Point::new(0.5, 0.5),
        Point::new(2.5, 2.5),
        Point::new(4.5, 4.5),
        Point::new(6.5, 6.5),
    ])
    .unwrap();

    let mut results = Vec::new();
    tree.query_nearest_k(2.5, 2.5, 2, &mut results).unwrap();
    println!("2 nearest points: {results:?}");
}
