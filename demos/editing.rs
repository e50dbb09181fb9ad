extern crate cubic_spline;

use cubic_spline::{EndType, MonotoneSpline};

// Run with RUST_LOG=trace to see when an edit rebuilds the whole curve.
fn main() {
    env_logger::init();

    let mut spline = MonotoneSpline::new(EndType::Open);

    for (i, v) in [0.0, 1.0, 1.0, 2.0, 4.0, 4.5, 8.0].iter().enumerate() {
        spline.insert(i, *v).unwrap();
    }
    spline.set_point(3, 3.0).unwrap();
    let removed = spline.remove(1).unwrap();
    println!("removed {}, {} points left", removed, spline.len());

    let mut reference = MonotoneSpline::new(EndType::Open);
    reference.set(spline.points());
    println!("matches bulk load: {}", reference == spline);

    println!("t;y");
    let number_of_steps = 60;
    for i in 0..=number_of_steps {
        let t = i as f64 / 10.0;
        println!("{:.2};{:.3}", t, spline.value(t));
    }
}
