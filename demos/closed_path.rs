extern crate cubic_spline;

use cubic_spline::{Akima, EndType, MultiSpline};
use nalgebra::dvector;

fn main() {
    env_logger::init();

    let corners = vec![
        dvector![0.0, 0.0],
        dvector![4.0, 0.0],
        dvector![5.0, 2.0],
        dvector![4.0, 4.0],
        dvector![0.0, 4.0],
        dvector![-1.0, 2.0],
    ];

    let mut path = MultiSpline::<Akima>::new(2, EndType::Close).unwrap();
    path.set(&corners).unwrap();

    let steps_per_segment = 8;
    let number_of_steps = steps_per_segment * path.len();

    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = i as f64 / steps_per_segment as f64;
        let point = path.value(t);
        println!("{:.3};{:.3};{:.3}", t, point[0], point[1]);
    }
}
