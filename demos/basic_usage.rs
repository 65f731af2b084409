// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vector::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Vector Example ===\n");

    VectorConfig::new().with_precision(20).install()?;
    println!("Installed configuration: {:?}\n", VectorConfig::global());

    // Arithmetic stays exact
    let a = Vector::new(["8.218", "-9.341"])?;
    let b = Vector::new(["-1.129", "2.111"])?;
    println!("{} + {} = {}", a, b, a.plus(&b)?);
    println!("{} - {} = {}", a, b, a.minus(&b)?);
    println!("{} * 7.41 = {}", a, a.multiply(Decimal::new(741, 2))?);

    // Norms go through one f64 square root
    println!("\n=== Norms ===");
    println!("|{}| = {}", a, a.magnitude()?);
    println!("unit({}) = {}", a, a.normalisation()?);

    // Angles and relationships
    println!("\n=== Angles ===");
    let u = Vector::new(["7.35", "0.221", "5.188"])?;
    let w = Vector::new(["2.751", "8.259", "3.985"])?;
    println!("angle = {:.4} degrees", u.angle(&w, AngleUnit::Degrees)?);
    println!("parallel: {}", u.is_parallel(&w)?);
    println!("orthogonal: {}", u.is_orthogonal(&w)?);

    // Projection
    println!("\n=== Projection ===");
    let (parallel, perpendicular) = u.decompose(&w)?;
    println!("parallel component: {}", parallel);
    println!("perpendicular component: {}", perpendicular);

    // 3D geometry
    println!("\n=== Cross Product ===");
    println!("{} x {} = {}", u, w, u.cross_product(&w)?);
    println!("parallelogram area: {}", u.area_of_parallelogram(&w)?);
    println!("triangle area: {}", u.area_of_triangle(&w)?);

    // Errors are values
    println!("\n=== Errors ===");
    if let Err(err) = Vector::zero(3)?.normalisation() {
        println!("normalising zero: {} ({:?})", err, err.kind());
    }
    if let Err(err) = a.cross_product(&b) {
        println!("2D cross product: {} ({:?})", err, err.kind());
    }

    Ok(())
}
