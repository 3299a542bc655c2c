// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use quadsift::{
    compaction_report, find_quadruples, find_quadruples_pruned, Quadruple, SearchBound,
    DEFAULT_SKIP,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// Input of the demo compaction.
const DEMO_INPUT: &[u8] = b"22 45";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::logging::init_logging(cli.verbose, cli.log_format) {
        eprintln!("warning: logging disabled: {}", e);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        None => run_demo(&mut out),
        Some(Commands::Compact { input, skip, json }) => {
            run_compact(&mut out, input.into_bytes(), skip, json)
        }
        Some(Commands::Quads {
            low,
            high,
            target,
            pruned,
            strict,
            count,
            json,
        }) => {
            let bound = SearchBound::new(low, high, target);
            if strict {
                bound.validate().context("strict bound check failed")?;
            }
            let quads = collect_quadruples(&bound, pruned);
            if count {
                writeln!(out, "{}", quads.len())?;
            } else if json {
                serde_json::to_writer(&mut out, &quads).context("failed to write JSON")?;
                writeln!(out)?;
            } else {
                for q in &quads {
                    writeln!(out, "{}", display::render_quadruple(q))?;
                }
            }
            Ok(())
        }
    }
}

fn collect_quadruples(bound: &SearchBound, pruned: bool) -> Vec<Quadruple> {
    let quads: Vec<Quadruple> = if pruned {
        find_quadruples_pruned(bound.low, bound.high, bound.target).collect()
    } else {
        find_quadruples(bound.low, bound.high, bound.target).collect()
    };
    info!(
        low = bound.low,
        high = bound.high,
        target = bound.target,
        pruned,
        matches = quads.len(),
        "search finished"
    );
    quads
}

fn run_compact(out: &mut impl Write, input: Vec<u8>, skip: u8, json: bool) -> Result<()> {
    let report = compaction_report(input, skip);
    info!(removed = report.removed, kept = report.output.len(), "compaction finished");

    if json {
        serde_json::to_writer(&mut *out, &report).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for line in display::render_compaction(&report) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// No subcommand: compact the demo buffer, then list the digit quadruples
/// summing to 30.
fn run_demo(out: &mut impl Write) -> Result<()> {
    run_compact(out, DEMO_INPUT.to_vec(), DEFAULT_SKIP, false)?;
    writeln!(out)?;

    let bound = SearchBound::default();
    let quads = collect_quadruples(&bound, false);
    let title = format!(
        "QUADRUPLES IN [{}, {}] SUMMING TO {}",
        bound.low, bound.high, bound.target
    );
    for line in display::render_quadruples(&title, &quads) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
