//! Factorize a small complex matrix, rebuild Q and check the result
//!
//! Debug events from the library are printed through tracing-subscriber.

use householder_qr::{
    Complex, CMatrix, RMatrix, build_q, factorize, from_real, reconstruction_error,
    unitarity_error,
};

fn print_matrix(name: &str, m: &CMatrix) {
    let (rows, cols) = *m.shape();
    println!("{} ({}x{}):", name, rows, cols);
    for i in 0..rows {
        let row: Vec<String> = (0..cols)
            .map(|j| format!("{:>8.4}{:+.4}i", m[[i, j]].re, m[[i, j]].im))
            .collect();
        println!("  [{}]", row.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Single real column: R[0,0] = -||[1, 4, 3, 8]|| = -sqrt(90)
    let column = RMatrix::from_fn([4, 1], |idx| [1.0, 4.0, 3.0, 8.0][idx[0]]);
    let a = from_real(&column);
    let (w, r) = factorize(&a)?;
    let q = build_q(&w);
    print_matrix("W", w.as_matrix());
    print_matrix("R", &r);
    println!("unitarity error: {:e}", unitarity_error(&q));

    // Tall complex matrix
    let a = CMatrix::from_fn([5, 3], |idx| {
        let (i, j) = (idx[0] as f64, idx[1] as f64);
        Complex::new((i + 1.0).powf(j), (i - 2.0 * j).sin())
    });
    let (w, r) = factorize(&a)?;
    let q = build_q(&w);
    print_matrix("R", &r);
    println!("unitarity error: {:e}", unitarity_error(&q));
    println!("relative reconstruction error: {:e}", reconstruction_error(&a, &q, &r)?);

    Ok(())
}
