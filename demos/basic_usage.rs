// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;
use exact_money::shortcuts::{float, EUR, JOD, VND};

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    MoneyConfig::eurozone().install()?;

    println!("=== Exact Money Example ===\n");

    // Construction
    let price = Money::forge(1999, "EUR")?;
    let shipping = float::EUR(4.5);
    let total = price.add(&shipping)?;
    println!("Price:    {}", price);
    println!("Shipping: {}", shipping);
    println!("Total:    {} ({})", total, total.amount_as_string());

    let discount = total.percent_off(15)?;
    println!("15% off:  {}", total.subtract(&discount)?);

    // Currencies with 0 and 3 minor digits
    println!("\n=== Minor Units ===");
    for money in [VND(25258), JOD(1011), EUR(101)] {
        println!(
            "{:<10} -> {} major units (x{})",
            money.to_string(),
            money.to_float(),
            money.minor_unit_multiplier()
        );
    }

    // Conversion
    println!("\n=== Conversion ===");
    let rate = Rate::from_codes("EUR", "USD", 1.1)?;
    let dollars = total.convert_to(&rate)?;
    println!("{} @ {} = {}", total, rate.rate(), dollars);
    println!("and back: {}", dollars.convert_to(&rate)?);

    // Mixing currencies is an error
    if let Err(err) = total.add(&dollars) {
        println!("Refused: {}", err);
    }

    // Display
    println!("\n=== Display ===");
    for locale in ["en", "it", "ru", "de-CH"] {
        println!("{:<6} {}", locale, display(&total, locale)?);
    }
    println!("{:<6} {}", "iso", display_iso(&dollars, "en")?);

    // Parsing and storage
    println!("\n=== Parsing & Storage ===");
    let parsed: Money = "USD 2131".parse()?;
    println!("Parsed \"USD 2131\" as {}", parsed);
    println!("Bare \"3324\" uses the default: {}", Money::parse("3324")?);

    let column = parsed.value();
    let mut restored = Money::zero(parsed.currency());
    restored.scan(column.clone())?;
    println!("Stored {:?}, restored {}", column, restored);

    #[cfg(feature = "serde")]
    println!("JSON: {}", total.to_json()?);

    Ok(())
}
