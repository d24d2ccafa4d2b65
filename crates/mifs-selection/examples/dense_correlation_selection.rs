use ndarray::{arr1, arr2};

use mifs_selection::feature_selection::{
    IterationRecord, SequentialBackwardSelection, SequentialForwardSelection,
};
use mifs_selection::{FeatureUniverse, ImportanceMap, RedundancyMatrix};

fn main() {
    env_logger::init();

    // Six features: x1/x2 and x4/x5 are near-duplicates of each other
    let importance = ImportanceMap::from_array(&arr1(&[0.45, 0.4, 0.2, 0.35, 0.3, 0.05]));
    let redundancy = RedundancyMatrix::from_dense(&arr2(&[
        [1.0, 0.35, 0.05, 0.1, 0.1, 0.0],
        [0.35, 1.0, 0.05, 0.1, 0.1, 0.0],
        [0.05, 0.05, 1.0, 0.05, 0.05, 0.0],
        [0.1, 0.1, 0.05, 1.0, 0.3, 0.0],
        [0.1, 0.1, 0.05, 0.3, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    ]));
    let universe = FeatureUniverse::range(6);

    let forward = SequentialForwardSelection::new(&universe, &importance, &redundancy);
    let mut trace: Vec<IterationRecord> = Vec::new();
    match forward.select_with(&mut trace) {
        Ok(selected) => {
            for record in &trace {
                println!("forward {}: {} {}", record.size, record.score, record.features);
            }
            println!("forward selected: {}", selected);
        }
        Err(e) => eprintln!("forward selection failed: {}", e),
    }

    let backward = SequentialBackwardSelection::new(&universe, &importance, &redundancy);
    match backward.select(3, true) {
        Ok(selected) => println!("backward selected (max 3): {}", selected),
        Err(e) => eprintln!("backward selection failed: {}", e),
    }
}
