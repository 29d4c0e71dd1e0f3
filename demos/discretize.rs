//! MDLP and fixed-strategy binning on a small labeled feature.

use mdlp::{BinDiscretizer, BinStrategy, CutBudget, Discretizer, Mdlp};

fn main() {
    // Petal-length-like feature with three classes.
    let values: Vec<f32> = vec![
        1.4, 1.3, 1.5, 1.7, 1.4, 1.6, 1.9, 1.2, // class 0
        4.7, 4.5, 4.9, 4.0, 4.6, 3.9, 4.4, 4.8, 5.0, // class 1
        6.0, 5.1, 5.9, 5.6, 5.8, 6.6, 4.8, 5.5, // class 2
    ];
    let labels: Vec<i32> = [0; 8]
        .into_iter()
        .chain([1; 9])
        .chain([2; 8])
        .collect();

    // --- MDLP (unbounded) ---
    let mut mdlp = Mdlp::new();
    let bins = mdlp.fit_transform(&values, &labels).unwrap();
    println!("=== MDLP ===");
    println!("  cut points: {:?} (depth {})", mdlp.cut_points().unwrap(), mdlp.depth());
    for ((v, l), b) in values.iter().zip(&labels).zip(&bins) {
        println!("  value {:4.1} class {} => bin {}", v, l, b);
    }

    // --- MDLP with a single cut point ---
    let mut pruned = Mdlp::new().with_cut_budget(CutBudget::Count(1));
    pruned.fit(&values, &labels).unwrap();
    println!("\n=== MDLP (budget 1) ===");
    println!("  cut points: {:?}", pruned.cut_points().unwrap());

    // --- Equal-width and equal-frequency ---
    for strategy in [BinStrategy::Uniform, BinStrategy::Quantile] {
        let mut binner = BinDiscretizer::new(3, strategy);
        binner.fit(&values, &[]).unwrap();
        println!("\n=== {:?} (3 bins) ===", strategy);
        println!("  cut points: {:?}", binner.cut_points().unwrap());
    }
}
