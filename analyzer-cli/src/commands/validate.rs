// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sra validate` command - Validate a run configuration file.

use std::path::Path;

use analyzer_core::{generate_sizes, ConfigLoader};
use analyzer_report::serialize_iterable;

pub fn execute(file: &Path) -> anyhow::Result<()> {
    tracing::info!(file = %file.display(), "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            let sampling = &config.sampling;
            let profiling = &config.profiling;

            println!("✓ Configuration is valid");
            println!();
            println!("Sampling:");
            println!("  Sample Count:    {}", sampling.sample_count);
            println!("  Max Sample Size: {}", sampling.max_sample_size);
            println!("  Round To:        {}", sampling.sizes.round_to);
            println!("  Bias:            {}", sampling.sizes.bias);
            println!();
            println!("Profiling:");
            println!("  Unit:            {}", profiling.unit);
            match profiling.report_unit {
                Some(unit) => println!("  Report Unit:     {}", unit),
                None => println!("  Report Unit:     (same as unit)"),
            }
            println!();

            let sizes = generate_sizes(
                sampling.sample_count,
                sampling.max_sample_size,
                &sampling.sizes,
            );
            println!("Sizes: {}", serialize_iterable(&sizes));
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
