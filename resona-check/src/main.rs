// Resona Check Tool
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod checks;

use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use resona_core::errors::{invalid_argument_error, Result};
use resona_core::util::bits::is_power_of_two;

use checks::{run_check, CheckResult};

/// The largest transform size that may be checked. The DCT allocates a complex scratch buffer of 8
/// times the size, or 128 MiB at this limit.
const MAX_CHECK_SIZE: usize = 1 << 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Transform {
    Fft,
    Dct,
    Tdac,
    Haar,
    Cdf53,
    Lpc,
    Autocorr,
    All,
}

impl Transform {
    const ALL: [Transform; 7] = [
        Transform::Fft,
        Transform::Dct,
        Transform::Tdac,
        Transform::Haar,
        Transform::Cdf53,
        Transform::Lpc,
        Transform::Autocorr,
    ];

    fn name(&self) -> &'static str {
        match self {
            Transform::Fft => "fft",
            Transform::Dct => "dct",
            Transform::Tdac => "tdac",
            Transform::Haar => "haar",
            Transform::Cdf53 => "cdf53",
            Transform::Lpc => "lpc",
            Transform::Autocorr => "autocorr",
            Transform::All => "all",
        }
    }
}

#[derive(Parser)]
#[command(name = "resona-check")]
#[command(version, about = "Check Resona transforms for reversibility and accuracy", long_about = None)]
struct Args {
    /// The transform to check
    #[arg(long, value_enum, default_value = "all")]
    transform: Transform,
    /// The smallest transform size to check (a power of two)
    #[arg(long, default_value_t = 1)]
    min_size: usize,
    /// The largest transform size to check (a power of two, at most 1048576). The DCT check
    /// allocates 128 bytes of scratch per sample
    #[arg(long, default_value_t = 4096)]
    max_size: usize,
    /// The seed of the random signal generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// The absolute maximum allowable sample delta
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Only print test results
    #[arg(long, short)]
    quiet: bool,
    /// Print the test results as JSON
    #[arg(long)]
    json: bool,
}

struct CheckOptions {
    min_size: usize,
    max_size: usize,
    seed: u64,
    tolerance: f64,
    is_quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    tolerance: f64,
    pass: bool,
    results: &'a [CheckResult],
}

fn validate(args: &Args) -> Result<CheckOptions> {
    if !is_power_of_two(args.min_size) || !is_power_of_two(args.max_size) {
        return invalid_argument_error("sizes must be powers of two");
    }

    if args.min_size > args.max_size {
        return invalid_argument_error("minimum size exceeds the maximum size");
    }

    if args.max_size > MAX_CHECK_SIZE {
        return invalid_argument_error("maximum size is too large");
    }

    if args.tolerance.is_nan() || args.tolerance < 0.0 {
        return invalid_argument_error("tolerance must be a non-negative number");
    }

    Ok(CheckOptions {
        min_size: args.min_size,
        max_size: args.max_size,
        seed: args.seed,
        tolerance: args.tolerance,
        is_quiet: args.quiet,
    })
}

fn run(args: &Args, opts: &CheckOptions) -> Result<Vec<CheckResult>> {
    let transforms = match args.transform {
        Transform::All => &Transform::ALL[..],
        ref single => std::slice::from_ref(single),
    };

    let mut results = Vec::with_capacity(transforms.len());

    for &transform in transforms {
        info!("checking {} from size {} to {}", transform.name(), opts.min_size, opts.max_size);
        results.push(run_check(transform, opts)?);
    }

    Ok(results)
}

fn print_results(results: &[CheckResult], opts: &CheckOptions) {
    if !opts.is_quiet {
        println!();
    }

    println!("Test Results");
    println!("=================================================");
    println!();
    println!("  Seed: {}, Tolerance: {:e}", opts.seed, opts.tolerance);
    println!();
    println!("  {:<10} {:>21} {:>16}", "Transform", "Failed/Total Sizes", "Max Delta");

    for res in results {
        println!(
            "  {:<10} {:>10}/{:<10} {:>16.8e}",
            res.transform, res.n_failed_sizes, res.n_sizes, res.abs_max_delta
        );
    }

    println!();
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let opts = match validate(&args) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("Invalid arguments: {}", err);
            std::process::exit(2);
        }
    };

    let results = match run(&args, &opts) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("Test interrupted by error: {}", err);
            std::process::exit(2);
        }
    };

    let pass = results.iter().all(CheckResult::is_pass);

    if args.json {
        let report = Report { seed: opts.seed, tolerance: opts.tolerance, pass, results: &results };

        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialize the test results: {}", err);
                std::process::exit(2);
            }
        }
    }
    else {
        print_results(&results, &opts);
    }

    let ret = if pass {
        if !args.json {
            println!("PASS");
        }
        0
    }
    else {
        if !args.json {
            println!("FAIL");
        }
        1
    };

    std::process::exit(ret);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("resona-check").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn verify_default_args() {
        let args = parse(&[]);

        assert_eq!(args.transform, Transform::All);

        let opts = validate(&args).unwrap();
        assert_eq!(opts.min_size, 1);
        assert_eq!(opts.max_size, 4096);
    }

    #[test]
    fn verify_invalid_args() {
        assert!(validate(&parse(&["--min-size", "3"])).is_err());
        assert!(validate(&parse(&["--min-size", "64", "--max-size", "32"])).is_err());
        assert!(validate(&parse(&["--tolerance=-1"])).is_err());
        assert!(Args::try_parse_from(["resona-check", "--transform", "mdct"]).is_err());
    }

    #[test]
    fn verify_max_size_limit() {
        assert!(validate(&parse(&["--max-size", "1048576"])).is_ok());
        assert!(validate(&parse(&["--max-size", "2097152"])).is_err());
        assert!(validate(&parse(&["--max-size", "16777216"])).is_err());
    }

    #[test]
    fn verify_lpc_small_sizes_pass() {
        // Short windows are where a finite exponential biases the trained coefficient the most.
        for seed in ["0", "1", "7"] {
            let args = parse(&["--transform", "lpc", "--max-size", "16", "--seed", seed, "-q"]);
            let opts = validate(&args).unwrap();

            let results = run(&args, &opts).unwrap();

            assert_eq!(results[0].n_sizes, 4);
            assert!(results[0].is_pass(), "{:?}", results[0]);
        }
    }

    #[test]
    fn verify_all_transforms_pass() {
        let args = parse(&["--max-size", "256", "--quiet", "--transform", "all"]);
        let opts = validate(&args).unwrap();

        let results = run(&args, &opts).unwrap();

        assert_eq!(results.len(), Transform::ALL.len());

        for res in &results {
            assert!(res.is_pass(), "{:?}", res);
            assert!(res.n_sizes > 0);
        }
    }

    #[test]
    fn verify_single_transform() {
        let args = parse(&["--transform", "cdf53", "--min-size", "8", "--max-size", "64"]);
        let opts = validate(&args).unwrap();

        let results = run(&args, &opts).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].transform, "cdf53");
        assert_eq!(results[0].n_sizes, 4);
    }
}
