extern crate cubic_spline;

use cubic_spline::{AkimaSpline, CatmullRomSpline, EndType, MonotoneSpline, PixelSpline};

fn main() {
    env_logger::init();

    let values = [12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0];

    let mut catmull_rom = CatmullRomSpline::new(EndType::Open);
    let mut monotone = MonotoneSpline::new(EndType::Open);
    let mut akima = AkimaSpline::new(EndType::Open);
    let mut pixel = PixelSpline::new(EndType::Open);

    catmull_rom.set(&values);
    monotone.set(&values);
    akima.set(&values);
    pixel.set(&values);

    let number_of_steps = 100;
    let step = (values.len() - 1) as f64 / number_of_steps as f64;
    let t_vector: Vec<f64> = (0..=number_of_steps).map(|i| step * i as f64).collect();

    let columns = [
        catmull_rom.batch_value(&t_vector),
        monotone.batch_value(&t_vector),
        akima.batch_value(&t_vector),
        pixel.batch_value(&t_vector),
    ];

    println!("t;catmull_rom;monotone;akima;pixel");
    for (i, t) in t_vector.iter().enumerate() {
        println!(
            "{:.2};{:.2};{:.2};{:.2};{:.2}",
            t, columns[0][i], columns[1][i], columns[2][i], columns[3][i]
        );
    }
}
