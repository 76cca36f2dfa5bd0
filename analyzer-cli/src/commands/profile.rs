// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sra profile` command - Profile sorting algorithms over random samples.
//!
//! Generates sizes, fills samples with random integers, profiles each
//! selected algorithm on the same samples and writes the reports.

use std::path::PathBuf;

use analyzer_core::{
    generate_samples, generate_sizes, ConfigLoader, ProfilingConfig, Profiler, RunConfig,
    RuntimeProfile, SamplingConfig, SizeConfig, TimeUnit,
};
use analyzer_report::{print_report, save_samples, serialize_iterable, ProfileReporter, ReportFormat};
use anyhow::{bail, Context};

use crate::algorithms::{fill_random, Algorithm};
use crate::SamplingArgs;

/// Resolved arguments for a profiling run.
#[derive(Debug, Clone)]
pub struct ProfileOptions {
    pub config: Option<PathBuf>,
    pub sampling: SamplingArgs,
    pub unit: TimeUnit,
    pub report_unit: Option<TimeUnit>,
    pub algorithms: Vec<Algorithm>,
    pub output: PathBuf,
    pub formats: Vec<ReportFormat>,
    pub save_samples: Option<PathBuf>,
}

pub fn execute(options: ProfileOptions) -> anyhow::Result<()> {
    let run = resolve_run_config(&options)?;
    let sampling = &run.sampling;

    println!("Runtime Analyzer");
    println!("================");
    println!(
        "Samples: {} (max size {}, round to {}, bias {})",
        sampling.sample_count,
        sampling.max_sample_size,
        sampling.sizes.round_to,
        sampling.sizes.bias
    );
    println!();

    let sizes = generate_sizes(sampling.sample_count, sampling.max_sample_size, &sampling.sizes);
    let samples: Vec<Vec<i32>> = generate_samples(fill_random, &sizes);

    if let Some(path) = &options.save_samples {
        save_samples(&samples, |s| serialize_iterable(s), path)
            .with_context(|| format!("saving samples to {}", path.display()))?;
        println!("Samples saved to: {}", path.display());
    }

    let reporter = if options.formats.is_empty() {
        None
    } else {
        Some(ProfileReporter::new(&options.output).with_context(|| {
            format!("creating output directory {}", options.output.display())
        })?)
    };

    let profiler = Profiler::new().unit(run.profiling.unit);

    for algorithm in &options.algorithms {
        tracing::info!(algorithm = %algorithm, samples = samples.len(), "Profiling");

        let profile = profiler.run(&samples, |mut sample: Vec<i32>| {
            algorithm.sort(&mut sample);
            sample
        })?;
        let profile = to_report_unit(profile, &run.profiling);

        println!("{}:", algorithm);
        print_report(&profile)?;
        println!();

        if let Some(reporter) = &reporter {
            for format in &options.formats {
                let path = reporter.save(&profile, algorithm.name(), *format)?;
                println!("  ✓ saved {}", path.display());
            }
        }
    }

    Ok(())
}

/// Build the run configuration from a config file or from flags.
pub fn resolve_run_config(options: &ProfileOptions) -> anyhow::Result<RunConfig> {
    if let Some(path) = &options.config {
        return ConfigLoader::load_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    let args = &options.sampling;
    if args.count == 0 {
        bail!("--count must be greater than 0");
    }
    let sizes = SizeConfig::new(args.round_to, args.bias)?;
    if args.max < sizes.round_to.value() {
        bail!(
            "--max ({}) must be at least --round-to ({})",
            args.max,
            sizes.round_to
        );
    }

    Ok(RunConfig {
        sampling: SamplingConfig {
            sample_count: args.count,
            max_sample_size: args.max,
            sizes,
        },
        profiling: ProfilingConfig {
            unit: options.unit,
            report_unit: options.report_unit,
        },
    })
}

fn to_report_unit(profile: RuntimeProfile, profiling: &ProfilingConfig) -> RuntimeProfile {
    match profiling.report_unit {
        Some(unit) if unit != profile.unit() => profile.convert_to(unit),
        _ => profile,
    }
}
