// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::PathBuf;
use symbench::{
    config::{
        AesGcmConfig, DEFAULT_AES_GCM_IV_PATH, DEFAULT_AES_GCM_KEY_PATH, DEFAULT_PLAINTEXT_PATH,
    },
    encoding::{Encoding, Hex},
    error::SymBenchError,
    runner::run_aes_gcm,
};
use symbench_cli::{aes_gcm_report_lines, exit_code, init_tracing};

#[derive(Parser)]
#[command(name = "aesgcm-meas")]
#[command(about = "Time an AES-GCM encryption and the matching authenticated decryption", long_about = None)]
struct Arguments {
    /// File holding the raw AES key (16, 24 or 32 bytes).
    #[clap(long, default_value = DEFAULT_AES_GCM_KEY_PATH)]
    key: PathBuf,
    /// File holding the raw 12-byte nonce.
    #[clap(long, default_value = DEFAULT_AES_GCM_IV_PATH)]
    iv: PathBuf,
    /// File to encrypt.
    #[clap(long, default_value = DEFAULT_PLAINTEXT_PATH)]
    plaintext: PathBuf,
    /// Hex encoded additional authenticated data.
    #[clap(long, default_value = "")]
    aad: String,
    /// Untimed runs before measuring.
    #[clap(long, default_value_t = 0)]
    warmup: usize,
    /// Timed runs of each operation.
    #[clap(long, default_value_t = 1)]
    iterations: usize,
    /// Flip a bit of the ciphertext before decrypting, to exercise tamper detection.
    #[clap(long)]
    tamper: bool,
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
            println!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn execute(args: Arguments) -> Result<(), SymBenchError> {
    let config = AesGcmConfig {
        key_path: args.key,
        iv_path: args.iv,
        plaintext_path: args.plaintext,
        aad: Hex::decode(&args.aad)?,
        warmup: args.warmup,
        iterations: args.iterations,
        tamper: args.tamper,
    };

    if args.print_config {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| SymBenchError::InvalidInput(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    let report = run_aes_gcm(&config)?;
    for line in aes_gcm_report_lines(&report) {
        println!("{}", line);
    }
    Ok(())
}
