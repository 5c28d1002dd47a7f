// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::PathBuf;
use symbench::{
    config::{HmacConfig, KeySource, DEFAULT_HMAC_KEY, DEFAULT_PLAINTEXT_PATH},
    encoding::{Encoding, Hex},
    error::SymBenchError,
    hmac::DEFAULT_CHUNK_SIZE,
    runner::run_hmac,
};
use symbench_cli::{exit_code, hmac_report_lines, init_tracing};

#[derive(Parser)]
#[command(name = "hmac-meas")]
#[command(about = "Time the HMAC-SHA256 of a file, streamed in fixed size chunks", long_about = None)]
struct Arguments {
    /// Secret key given as a literal string; its bytes are used as is.
    #[clap(long, conflicts_with_all = ["key_hex", "key_file"])]
    key_literal: Option<String>,
    /// Secret key given as a hex string.
    #[clap(long, conflicts_with = "key_file")]
    key_hex: Option<String>,
    /// File holding the raw secret key.
    #[clap(long)]
    key_file: Option<PathBuf>,
    /// File to authenticate.
    #[clap(long, default_value = DEFAULT_PLAINTEXT_PATH)]
    file: PathBuf,
    /// Bytes read from the file per update.
    #[clap(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    /// Untimed finalizations before measuring.
    #[clap(long, default_value_t = 0)]
    warmup: usize,
    /// Timed finalizations.
    #[clap(long, default_value_t = 1)]
    iterations: usize,
    /// Print the configuration as JSON and exit without running.
    #[clap(long)]
    print_config: bool,
}

fn main() {
    init_tracing();
    match execute(Arguments::parse()) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            // Failures take the place of the digest.
            println!("HMAC: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn key_source(args: &Arguments) -> Result<KeySource, SymBenchError> {
    Ok(match (&args.key_literal, &args.key_hex, &args.key_file) {
        (Some(literal), _, _) => KeySource::Literal(literal.as_bytes().to_vec()),
        (_, Some(hex), _) => KeySource::Literal(Hex::decode(hex)?),
        (_, _, Some(path)) => KeySource::File(path.clone()),
        (None, None, None) => KeySource::Literal(DEFAULT_HMAC_KEY.to_vec()),
    })
}

fn execute(args: Arguments) -> Result<(), SymBenchError> {
    let config = HmacConfig {
        key: key_source(&args)?,
        file_path: args.file,
        chunk_size: args.chunk_size,
        warmup: args.warmup,
        iterations: args.iterations,
    };

    if args.print_config {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| SymBenchError::InvalidInput(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    let report = run_hmac(&config)?;
    for line in hmac_report_lines(&report) {
        println!("{}", line);
    }
    Ok(())
}
