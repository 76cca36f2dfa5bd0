// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sra sizes` command - Print a generated size distribution.

use analyzer_core::{generate_sizes, SizeConfig};
use analyzer_report::serialize_iterable;

use crate::SamplingArgs;

pub fn execute(args: &SamplingArgs) -> anyhow::Result<()> {
    let config = SizeConfig::new(args.round_to, args.bias)?;
    let sizes = generate_sizes(args.count, args.max, &config);

    tracing::info!(
        count = args.count,
        max = args.max,
        round_to = args.round_to,
        bias = args.bias,
        "Generated sample sizes"
    );

    if sizes.is_empty() {
        println!("No sizes generated (count is 0 or max is below round-to).");
        return Ok(());
    }

    println!("{}", serialize_iterable(&sizes));
    Ok(())
}
