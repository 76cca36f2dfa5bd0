// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Runtime Analyzer CLI
//!
//! Command-line driver for generating sample sizes and profiling sorting
//! algorithms over random data.

use std::path::PathBuf;

use analyzer_core::TimeUnit;
use analyzer_report::ReportFormat;
use clap::{Parser, Subcommand};

mod algorithms;
mod commands;

use algorithms::Algorithm;

/// sra - Simple runtime analyzer
#[derive(Parser)]
#[command(name = "sra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sampling flags shared by `sizes` and `profile`.
#[derive(clap::Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Largest sample size
    #[arg(short, long, default_value_t = 100_000)]
    pub max: usize,

    /// Rounding granularity (also the smallest size)
    #[arg(short, long, default_value_t = 100)]
    pub round_to: usize,

    /// Density skew exponent across the log range
    #[arg(short, long, default_value_t = 1.0)]
    pub bias: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a generated sample size distribution
    Sizes {
        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Profile sorting algorithms over generated samples
    Profile {
        /// Run configuration file (overrides sampling and unit flags)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Measurement unit
        #[arg(short, long, default_value = "us")]
        unit: TimeUnit,

        /// Convert profiles to this unit before reporting
        #[arg(long)]
        report_unit: Option<TimeUnit>,

        /// Algorithms to profile
        #[arg(short, long = "algorithm", value_enum, default_values_t = [Algorithm::Std, Algorithm::Stable])]
        algorithms: Vec<Algorithm>,

        /// Output directory for report files
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        /// Report formats to save (txt, csv, json)
        #[arg(short, long = "format")]
        formats: Vec<ReportFormat>,

        /// Also save the generated samples to this file
        #[arg(long)]
        save_samples: Option<PathBuf>,
    },

    /// Validate a run configuration file
    Validate {
        /// Path to the configuration file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Sizes { sampling } => commands::sizes::execute(&sampling),
        Commands::Profile {
            config,
            sampling,
            unit,
            report_unit,
            algorithms,
            output,
            formats,
            save_samples,
        } => commands::profile::execute(commands::profile::ProfileOptions {
            config,
            sampling,
            unit,
            report_unit,
            algorithms,
            output,
            formats,
            save_samples,
        }),
        Commands::Validate { file } => commands::validate::execute(&file),
    }
}
