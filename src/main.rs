use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use plates_rs::{
    calculator::Calculator,
    input::{PlateCount, barbell_weight_arg, target_weight_arg},
    settings::{FileStore, SETTINGS_KEY, SettingsStore},
    unit::Unit,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Work out which plates to put on each side of a barbell.
#[derive(Parser)]
#[command(name = "plates", version, about)]
struct Args {
    /// Plates owned, as WEIGHTxCOUNT pairs (e.g. 45x2 25x1)
    #[arg(value_parser = clap::value_parser!(PlateCount))]
    plates: Vec<PlateCount>,

    /// Unit system, lb or kg (clears plate counts when changing unit)
    #[arg(short, long, value_parser = clap::value_parser!(Unit))]
    unit: Option<Unit>,

    /// Barbell weight
    #[arg(short, long, value_parser = barbell_weight_arg)]
    bar: Option<f64>,

    /// Total weight wanted on the bar
    #[arg(short, long, value_parser = target_weight_arg, allow_negative_numbers = true)]
    target: Option<f64>,

    /// Forget stored settings before applying anything else
    #[arg(long)]
    reset: bool,

    /// Do not store the resulting settings
    #[arg(long)]
    no_save: bool,

    /// Directory holding the stored settings
    #[arg(long, env = "PLATES_SETTINGS_DIR")]
    settings_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let store = match args.settings_dir.clone() {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location()?,
    };
    tracing::debug!(dir = %store.dir().display(), "settings store");

    if args.reset {
        store.remove(SETTINGS_KEY)?;
    }

    let mut calculator = Calculator::restore(&store);

    if let Some(unit) = args.unit {
        calculator.set_unit(unit);
    }
    if let Some(bar) = args.bar {
        calculator.set_barbell_weight(bar);
    }
    if let Some(target) = args.target {
        calculator.set_desired_total_weight(target);
    }
    for PlateCount { weight, count } in &args.plates {
        calculator.set_count(*weight, *count)?;
    }

    print_summary(&calculator);

    if !args.no_save {
        calculator.persist(&store);
    }

    Ok(())
}

fn print_summary(calculator: &Calculator) {
    let unit = calculator.unit();
    let plan = calculator.plan();

    let owned = calculator
        .inventory()
        .plates()
        .iter()
        .filter(|plate| plate.count() > 0)
        .map(|plate| format!("{}x{}", plate.weight(), plate.count()))
        .join(" ");

    println!("Unit: {unit}");
    println!(
        "Plates owned (pairs): {}",
        if owned.is_empty() { "none" } else { owned.as_str() }
    );
    println!(
        "Bar: {}{unit}  Target: {}{unit}",
        calculator.barbell_weight(),
        calculator.desired_total_weight()
    );
    println!("Load: {plan}");

    let loaded = plan.loaded_total(calculator.barbell_weight());
    let other = unit.toggled();
    println!(
        "Loaded total: {loaded}{unit} ({:.1}{other})",
        unit.convert(loaded, other)
    );

    if !plan.is_satisfied() {
        println!("Short by {}{unit} per side", plan.shortfall_per_side());
    }
}
