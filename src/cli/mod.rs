// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quadsift command-line interface.
//!
//! Two subcommands, one per procedure: `compact` filters a byte out of its
//! argument, `quads` enumerates quadruples. With no subcommand the binary
//! runs the demo: compact `"22 45"` and list the digit quadruples summing
//! to 30.

pub mod display;
pub mod logging;

use clap::{ArgAction, Parser, Subcommand};
use quadsift::{DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_TARGET};

use logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "quadsift",
    about = "In-place byte compaction and bounded quadruple-sum search",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove every occurrence of one byte from INPUT, keeping order
    Compact {
        /// Text whose UTF-8 bytes are compacted
        input: String,

        /// Byte to remove: a single ASCII character or 0xNN
        #[arg(short, long, default_value = " ", value_parser = parse_skip_byte)]
        skip: u8,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List non-decreasing quadruples in [LOW, HIGH] summing to TARGET
    Quads {
        /// Inclusive lower bound for every component
        #[arg(long, default_value_t = DEFAULT_LOW, allow_negative_numbers = true)]
        low: i64,

        /// Inclusive upper bound for every component
        #[arg(long, default_value_t = DEFAULT_HIGH, allow_negative_numbers = true)]
        high: i64,

        /// Sum every quadruple must hit
        #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
        target: i64,

        /// Cut each range short once the target is out of reach
        #[arg(long)]
        pruned: bool,

        /// Reject LOW > HIGH instead of printing nothing
        #[arg(long)]
        strict: bool,

        /// Print only the number of matches
        #[arg(long, conflicts_with = "json")]
        count: bool,

        /// Print matches as a JSON array of [w, x, y, z]
        #[arg(long)]
        json: bool,
    },
}

/// Parse the `--skip` argument: one ASCII character, or `0xNN` for any byte.
pub fn parse_skip_byte(value: &str) -> Result<u8, String> {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid hex byte '{}': {}", value, e));
    }

    match value.as_bytes() {
        [byte] => Ok(*byte),
        [] => Err("skip byte must not be empty".to_string()),
        _ => Err(format!(
            "skip must be one ASCII character or 0xNN, got '{}' ({} bytes)",
            value,
            value.len()
        )),
    }
}
