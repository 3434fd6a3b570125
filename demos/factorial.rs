// ============================================================================
// Factorial Demo
// ============================================================================

use big_unsigned::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Big Unsigned Demo ===\n");

    // Separators are ignored when parsing
    let max = BigUnsigned::parse("18 446 744 073 709 551 615")?;
    println!("u64::MAX       = {}", max);
    println!("with metadata  = {:?}\n", max);

    // Counting up from zero
    let mut counter = BigUnsigned::from(ZERO);
    for _ in 0..1000 {
        counter = counter.checked_inc()?;
    }
    println!("1000 increments = {}\n", counter);

    // Factorials
    for n in [25, 30, 50, 100] {
        let f = BigUnsigned::factorial(n)?;
        println!("{:>3}! = {} ({} digits)", n, f, f.digit_count());
    }

    // Crossing a storage chunk
    println!("\nGrowing one value past a chunk boundary:");
    let mut value = BigUnsigned::from(ONE);
    for _ in 0..3 {
        value = value.checked_scale_pow10(200)?;
        println!("  digits={} capacity={}", value.digit_count(), value.capacity());
    }

    Ok(())
}
