extern crate cubic_spline;

use cubic_spline::{CatmullRomSpline, EndType};

fn main() {
    env_logger::init();

    let mut spline = CatmullRomSpline::new(EndType::Open);
    spline.set(&[1.0, -1.0, 0.0, 3.0, 1.0, 1.0]);

    let t_min = -1.0;
    let t_max = 6.0;
    let number_of_steps = 70;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;y;dy");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        println!("{:.2};{:.3};{:.3}", t, spline.value(t), spline.diff(t));
    }
}
