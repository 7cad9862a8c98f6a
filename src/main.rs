use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use fhe_timing::{
    timing, Context, Evaluator, Parameters, SectionReport, TimingError, TimingReport,
};

/// Time homomorphic multiplication and bootstrapping over a packed vector.
#[derive(Parser)]
#[command(name = "fhe_timing")]
#[command(about = "Time homomorphic multiplication and bootstrapping over a packed vector")]
struct Args {
    /// Parameter preset: `default`, `light` or `wide`
    #[arg(long, default_value = "default")]
    preset: String,

    /// Number of slots of the packed plaintext vector
    #[arg(long, default_value_t = 16)]
    slots: usize,

    /// Optional path of a TOML timing report to write
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), TimingError> {
    let args = Args::parse();

    if args.slots == 0 {
        return Err(TimingError::SlotCountUnValid(args.slots));
    }
    let params = Parameters::from_preset(&args.preset)?;

    let mut out = io::stdout();

    println!("Initialising context object...");
    let start = Instant::now();
    let context = Context::new(params);
    println!("Keys generated in {:?}.", start.elapsed());

    context.printout(&mut out)?;
    println!();
    println!(
        "Security: {}-bit parameter set, p_fail 2^{}",
        params.security_bits(),
        params.log2_p_fail()
    );

    let t = params.message_modulus();
    println!("Number of slots: {}", args.slots);

    // ptxt = [0] [1] [2] ... [nslots-1], each slot reduced mod t
    let values: Vec<u64> = (0..args.slots as u64).collect();
    let start = Instant::now();
    let mut ct = context.encrypt_slots(&values);
    println!("Packed vector encrypted in {:?}.", start.elapsed());

    let evaluator = Evaluator::new(&context);
    let mut sections = Vec::with_capacity(3);

    // Ciphertext multiplication
    timing::reset_all_timers();
    evaluator.square_assign(&mut ct);
    println!("Ciphertext multiplication");
    timing::print_named_timer(&mut out, timing::MULTIPLY)?;
    timing::print_named_timer(&mut out, timing::MULTIPLY_SLOT)?;
    sections.push(SectionReport::capture(
        timing::global(),
        "multiplication",
        &[timing::MULTIPLY, timing::MULTIPLY_SLOT],
    ));

    // Bootstrapping (full state)
    timing::reset_all_timers();
    evaluator.refresh_assign(&mut ct);
    println!("Bootstrapping (full state)");
    timing::print_named_timer(&mut out, timing::REFRESH)?;
    timing::print_named_timer(&mut out, timing::REFRESH_SLOT)?;
    sections.push(SectionReport::capture(
        timing::global(),
        "full state bootstrap",
        &[timing::REFRESH, timing::REFRESH_SLOT],
    ));

    // Bootstrapping (message only)
    timing::reset_all_timers();
    evaluator.extract_message_assign(&mut ct);
    println!("Bootstrapping (message only)");
    timing::print_named_timer(&mut out, timing::EXTRACT)?;
    timing::print_named_timer(&mut out, timing::EXTRACT_SLOT)?;
    sections.push(SectionReport::capture(
        timing::global(),
        "message only bootstrap",
        &[timing::EXTRACT, timing::EXTRACT_SLOT],
    ));

    // every slot must hold (i % t)^2 % t
    let decrypted = context.decrypt_slots(&ct);
    for (slot, (&found, &value)) in decrypted.iter().zip(values.iter()).enumerate() {
        let expected = ((value % t) * (value % t)) % t;
        if found != expected {
            return Err(TimingError::SlotMismatch {
                slot,
                found,
                expected,
            });
        }
    }
    println!("All {} slots verified.", args.slots);

    if let Some(path) = args.report {
        let report = TimingReport {
            preset: args.preset,
            slots: args.slots,
            sections,
        };
        report.write_to(&path)?;
        println!("Report written to {}.", path.display());
    }

    Ok(())
}
