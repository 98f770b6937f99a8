//! Price list verification example

use bgn_eur_verifier::{common_headers, RawCell, Table, Verifier, VerifierConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("💶 BGN → EUR Price List Verification\n");

    let config = VerifierConfig::default().with_progress_interval(2);
    println!("Conversion rate: {}\n", config.rate);

    // 1. A BGN price list, as exported before the changeover
    let bgn = Table::new(["Code", "Name", "Price", "Promo Price"])
        .with_row(vec![
            RawCell::from("1001"),
            RawCell::from("Bread"),
            RawCell::from("1,95583"),
            RawCell::Empty,
        ])
        .with_row(vec![
            RawCell::from("1002"),
            RawCell::from("Cheese"),
            RawCell::from(100.0),
            RawCell::from("89,90"),
        ])
        .with_row(vec![
            RawCell::from("1003"),
            RawCell::from("Coffee"),
            RawCell::from("1 234,56"),
            RawCell::from("n/a"),
        ]);

    // 2. The same list in euro, with two rounding mistakes
    let eur_csv = "\
Code,Name,Price,Promo Price
1001,Bread,\"1,00\",
1002,Cheese,\"51,00\",\"45,96\"
1003,Coffee,631.22,
";
    let eur = Table::from_csv_reader(eur_csv.as_bytes())?;

    let columns = common_headers(&bgn, &eur);
    println!("📋 Columns present in both files: {}", columns.join(", "));

    // 3. Verify the price columns
    let verifier = Verifier::new(config)?;
    let mut progress = |done: usize, total: usize| println!("  ... {done}/{total} rows");
    let report =
        verifier.verify_with_progress(&bgn, &eur, &["Price", "Promo Price"], &mut progress)?;

    println!();
    if report.is_clean() {
        println!("✅ {}", report.message());
        return Ok(());
    }

    println!("❌ {}\n", report.message());
    for mismatch in &report.mismatches {
        println!(
            "  Row {:>3} | {:<12} | BGN {:>10} | expected €{:>8} | file €{:>8} | diff {}",
            mismatch.sheet_row(),
            mismatch.column,
            mismatch.source_bgn,
            mismatch.calculated_eur,
            mismatch.given_eur,
            mismatch.difference
        );
    }

    println!("\n📄 Mismatch report (CSV):");
    print!("{}", String::from_utf8(report.to_csv_bytes()?)?);

    println!(
        "\n📊 {} comparisons: {} matched, {} mismatched, {} skipped",
        report.summary.comparisons,
        report.summary.matches,
        report.summary.mismatches,
        report.summary.not_applicable
    );

    Ok(())
}
