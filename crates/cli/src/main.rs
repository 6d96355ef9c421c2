//! Command-line runner for widthscan.
//!
//! Prints run metadata as JSON, then runs one of:
//!
//! - `sweep`: a multi-width sweep from a preset or explicit flags, printing
//!   `<width>\t<answer>` per width and a `Duration: <s> s` footer
//! - `single`: one grid search for a single width
//! - `naive`: the naive closed-form estimate for a list of widths
//!
//! Searches run in `f64` unless `--precision` says otherwise; the wide presets
//! default to the extended scalar, since their widths overflow `f64`.

mod output;
mod preset;

use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use widthscan_core::{Extended, Parameters, Real, WidthGap, naive_k};
use widthscan_solvers::{
    grid::{self, SearchSpec, Strategy},
    sweep::{self, Config, Tightening, WidthSequence},
};

use output::{RunInfo, duration_line, print_width};
use preset::SweepArgs;

#[derive(Debug, Parser)]
#[command(name = "widthscan", version, about = "Grid search for bit-width scaling roots")]
struct Cli {
    /// Floating-point type the search runs in [default: double, or extended
    /// for the wide presets].
    #[arg(long, value_enum, global = true)]
    precision: Option<Precision>,

    /// How each grid search evaluates its samples.
    #[arg(long, value_enum, default_value_t = StrategyArg::Sequential, global = true)]
    strategy: StrategyArg,

    /// Trust that answers decrease with width instead of checking it.
    #[arg(long, global = true)]
    unchecked: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Precision {
    /// 32-bit floats (`f32`).
    Single,
    /// 64-bit floats (`f64`).
    Double,
    /// 64-bit mantissa with a wide exponent range, like x87 `long double`.
    Extended,
}

impl Cli {
    /// Returns the requested precision, or the one the command calls for.
    fn precision(&self) -> Precision {
        self.precision.unwrap_or(match &self.command {
            Some(Command::Sweep(args)) if args.preset.is_wide() => Precision::Extended,
            _ => Precision::Double,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Sequential,
    Batch,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => Strategy::Sequential,
            StrategyArg::Batch => Strategy::Batch,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a sequence of widths, tightening the bound after each one.
    Sweep(SweepArgs),

    /// Solve a single width.
    Single(SingleArgs),

    /// Print the naive estimate (2^value)^(1 / (2^bits - 1)).
    Naive(NaiveArgs),
}

#[derive(Debug, Args)]
struct SingleArgs {
    /// Base width; sets s = 2^bits.
    #[arg(long, default_value_t = 8)]
    bits: u32,

    /// Solved width; sets b = 2^width.
    #[arg(long, default_value_t = 128)]
    width: u32,

    #[arg(long, default_value_t = 1.0)]
    left: f64,

    #[arg(long, default_value_t = 32.0)]
    right: f64,

    #[arg(long, default_value_t = 1e-6)]
    step: f64,
}

#[derive(Debug, Args)]
struct NaiveArgs {
    /// Base width of the root's degree, 2^bits - 1.
    #[arg(long, default_value_t = 16)]
    bits: u32,

    /// Widths to estimate, comma-separated.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [1024, 2048, 4096, 8192, 16_384]
    )]
    values: Vec<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tightening = if cli.unchecked {
        Tightening::Assumed
    } else {
        Tightening::Checked
    };
    let config = Config::new(cli.strategy.into(), tightening);

    match cli.precision() {
        Precision::Single => execute::<f32>(cli.command, &config),
        Precision::Double => execute::<f64>(cli.command, &config),
        Precision::Extended => execute::<Extended>(cli.command, &config),
    }
}

fn execute<T: Real>(command: Option<Command>, config: &Config) -> anyhow::Result<()> {
    println!("{}", RunInfo::new::<T>(config).to_json()?);

    match command {
        None => sweep_preset::<T>(&SweepArgs::default(), config),
        Some(Command::Sweep(args)) => sweep_preset::<T>(&args, config),
        Some(Command::Single(args)) => single::<T>(&args, config),
        Some(Command::Naive(args)) => print_naive::<T>(args.bits, &args.values),
    }
}

fn sweep_preset<T: Real>(args: &SweepArgs, config: &Config) -> anyhow::Result<()> {
    let inputs = args.resolve();

    let spec = search_spec::<T>(inputs.left, inputs.right, inputs.step)?;
    let widths = WidthSequence::new(inputs.bits, inputs.finish, &inputs.additional)
        .context("invalid width progression")?;

    let report = sweep::run(inputs.bits, &spec, &widths, config, print_width::<T>)?;
    println!("{}", duration_line(report.elapsed));

    if inputs.naive {
        print_naive::<T>(inputs.bits, &inputs.additional)?;
    }
    Ok(())
}

fn single<T: Real>(args: &SingleArgs, config: &Config) -> anyhow::Result<()> {
    let params = Parameters::<T>::from_widths(args.bits, args.width)?;
    let spec = search_spec::<T>(args.left, args.right, args.step)?;

    let start = Instant::now();
    let solution = grid::solve_unobserved(&WidthGap::new(params), &spec, config.strategy)?;
    let elapsed = start.elapsed();

    println!("Answer: {}", solution.x);
    println!("{}", duration_line(elapsed));
    Ok(())
}

fn print_naive<T: Real>(bits: u32, values: &[u32]) -> anyhow::Result<()> {
    println!("K NAIVE:");
    for &value in values {
        let k: T = naive_k(value, bits)?;
        println!("{value}\t{k:.16}");
    }
    Ok(())
}

fn search_spec<T: Real>(left: f64, right: f64, step: f64) -> anyhow::Result<SearchSpec<T>> {
    SearchSpec::new(T::of_f64(left), T::of_f64(right), T::of_f64(step))
        .context("invalid search interval")
}
