//! # Configuration
//!
//! Command-line arguments, each with a `TILL_*` environment fallback.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`TILL_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use clap::Parser;
use till_store::fixtures::DEMO_SCAN;

/// Scan items and print the checkout total.
#[derive(Debug, Clone, Parser)]
#[command(name = "till", author, version, about, long_about = None)]
pub struct Config {
    /// SKUs to scan, in order. Defaults to the demo scan (t01 t02 t01).
    pub skus: Vec<String>,

    /// JSON catalog to load instead of the demo fixture
    #[arg(short, long, env = "TILL_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, env = "TILL_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl Config {
    /// The SKUs to scan: the ones given, or the demo scan.
    pub fn scan_list(&self) -> Vec<&str> {
        if self.skus.is_empty() {
            DEMO_SCAN.to_vec()
        } else {
            self.skus.iter().map(String::as_str).collect()
        }
    }
}
