// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the `aesgcm-meas`, `hmac-meas` and `symbench-gen` binaries.

use symbench::error::SymBenchError;
use symbench::runner::{AesGcmReport, HmacReport};
use symbench::timing::TimingStats;
use tracing_subscriber::EnvFilter;

pub const AUTHENTICATION_SUCCESSFUL: &str = "Authentication successful";
pub const AUTHENTICATION_FAILED: &str =
    "Authentication failed - the data may have been tampered with!";

/// Log to stderr so stdout only carries the report. The level comes from `RUST_LOG` and
/// defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Process exit code for an error that ended a run.
pub fn exit_code(err: &SymBenchError) -> exitcode::ExitCode {
    match err {
        SymBenchError::Io { .. } => exitcode::IOERR,
        _ => exitcode::DATAERR,
    }
}

/// The median as the headline number, plus a summary line when more than one sample was taken.
pub fn timing_lines(label: &str, stats: &TimingStats) -> Vec<String> {
    let mut lines = vec![format!(
        "Time taken to {}: {} seconds",
        label,
        stats.median.as_secs_f64()
    )];
    if stats.count > 1 {
        lines.push(format!("Stats for {}: {}", stats.operation, stats));
    }
    lines
}

pub fn aes_gcm_report_lines(report: &AesGcmReport) -> Vec<String> {
    let mut lines = timing_lines("encrypt", &report.encrypt);
    lines.extend(timing_lines("decrypt", &report.decrypt));
    lines.push(
        match report.authenticated {
            true => AUTHENTICATION_SUCCESSFUL,
            false => AUTHENTICATION_FAILED,
        }
        .to_string(),
    );
    lines
}

pub fn hmac_report_lines(report: &HmacReport) -> Vec<String> {
    let mut lines = timing_lines("calculate HMAC", &report.finalize);
    lines.push(format!("HMAC: {}", report.digest));
    lines
}
