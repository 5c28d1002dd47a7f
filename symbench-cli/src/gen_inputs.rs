// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::path::PathBuf;
use symbench::{
    encoding::{Encoding, Hex},
    error::SymBenchError,
    inputs::{write_inputs, GeneratedInputs, DEFAULT_PLAINTEXT_SIZE},
};
use symbench_cli::{exit_code, init_tracing};

#[derive(Parser)]
#[command(name = "symbench-gen")]
#[command(about = "Write a random AES key, nonce and plaintext for aesgcm-meas and hmac-meas", long_about = None)]
struct Arguments {
    /// AES key size in bytes: 16, 24 or 32.
    #[clap(long, default_value_t = 32)]
    key_size: usize,
    /// Size of the random plaintext in bytes.
    #[clap(long, default_value_t = DEFAULT_PLAINTEXT_SIZE)]
    plaintext_size: usize,
    /// Directory to write the files into.
    #[clap(long, default_value = ".")]
    out_dir: PathBuf,
    /// Hex encoded 32-byte seed for deterministic generation, e.g. 0101010101010101010101010101010101010101010101010101010101010101.
    #[clap(long)]
    seed: Option<String>,
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
    let inputs = match &args.seed {
        Some(seed) => {
            let seed: [u8; 32] = Hex::decode(seed)?
                .try_into()
                .map_err(|_| SymBenchError::InvalidInput("seed must be 32 bytes".into()))?;
            let mut rng = StdRng::from_seed(seed);
            write_inputs(&args.out_dir, args.key_size, args.plaintext_size, &mut rng)?
        }
        None => write_inputs(
            &args.out_dir,
            args.key_size,
            args.plaintext_size,
            &mut thread_rng(),
        )?,
    };
    print_inputs(&inputs);
    Ok(())
}

fn print_inputs(inputs: &GeneratedInputs) {
    println!("Key: {}", inputs.key_path.display());
    println!("IV: {}", inputs.iv_path.display());
    println!("Plaintext: {}", inputs.plaintext_path.display());
}
