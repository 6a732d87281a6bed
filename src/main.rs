use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use sortbench::{
    BenchOptions, BenchSpec, Distribution, GenConfig, all_algorithms, bench, generate_table,
    logging, sort, write_table,
};

#[derive(Parser)]
#[command(
    name = "sortbench",
    about = "Generate synthetic CSV datasets and benchmark classic sorting algorithms on them"
)]
struct Cli {
    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a synthetic CSV dataset
    Generate(GenerateArgs),
    /// Time the sorting algorithms on one or more CSV datasets
    Bench(BenchArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output CSV path (parent directories are created)
    #[arg(short, long)]
    output: PathBuf,

    /// Number of data rows
    #[arg(short, long, default_value = "10000")]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value = "1")]
    columns: usize,

    /// Column that carries the key distribution
    #[arg(short, long, default_value = "0")]
    key_column: usize,

    /// Key distribution
    #[arg(short, long, value_enum, default_value = "uniform")]
    distribution: Distribution,

    /// Lower key bound (inclusive)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lower: i64,

    /// Upper key bound (inclusive)
    #[arg(long, default_value = "100000", allow_hyphen_values = true)]
    upper: i64,

    /// RNG seed; omit for a random seed
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct BenchArgs {
    /// Datasets as PATH or PATH:KEYCOL (key column defaults to 0)
    #[arg(required = true)]
    datasets: Vec<String>,

    /// Comma-separated algorithm names (default: all four)
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Vec<String>,

    /// Untimed warmup passes per algorithm
    #[arg(long, default_value = "0")]
    warmup: usize,

    /// Timed passes per algorithm
    #[arg(long, default_value = "1")]
    reps: usize,

    /// Check that each algorithm's output is sorted
    #[arg(short, long)]
    verify: bool,

    /// Append results to this CSV file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> sortbench::Result<()> {
    logging::init(cli.log_level)?;

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Bench(args) => run_bench(args),
    }
}

fn generate(args: GenerateArgs) -> sortbench::Result<()> {
    let config = GenConfig {
        rows: args.rows,
        columns: args.columns,
        key_column: args.key_column,
        distribution: args.distribution,
        lower: args.lower,
        upper: args.upper,
        seed: args.seed,
    };

    let table = generate_table(&config)?;
    write_table(&table.header, &table.rows, &args.output)?;

    println!(
        "Wrote {} rows ({} columns) to {}",
        table.len(),
        config.columns,
        args.output.display()
    );
    Ok(())
}

fn run_bench(args: BenchArgs) -> sortbench::Result<()> {
    let specs = args
        .datasets
        .iter()
        .map(|s| BenchSpec::parse(s))
        .collect::<sortbench::Result<Vec<_>>>()?;

    let algorithms = if args.algorithms.is_empty() {
        all_algorithms()
    } else {
        sort::lookup(&args.algorithms)?
    };

    let options = BenchOptions {
        warmup: args.warmup,
        reps: args.reps,
        verify: args.verify,
    };

    println!("Sort benchmark");
    println!("==============");
    println!("Configuration:");
    println!("  Datasets: {:?}", args.datasets);
    println!(
        "  Algorithms: {}",
        algorithms
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Warmup passes: {}", options.warmup);
    println!("  Timed passes: {}", options.reps);
    println!("  Verify output: {}", options.verify);

    let results = bench::run_benchmarks(&specs, &algorithms, &options)?;
    bench::display_results_table(&results);

    if let Some(out) = args.out {
        bench::write_results_csv(&results, &out)?;
        println!("\nResults appended to {}", out.display());
    }

    Ok(())
}
