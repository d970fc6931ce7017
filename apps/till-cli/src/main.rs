//! # Till Entry Point
//!
//! ```bash
//! # Demo fixture, demo scan
//! till
//!
//! # Demo fixture, own scan
//! till p01 p01 p01 p02
//!
//! # Own catalog
//! TILL_CATALOG=./shop.json till x1 x2
//! ```
//!
//! The setup lives in lib.rs for testability.

use clap::Parser;
use till_cli::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    till_cli::init_tracing(config.log_json);
    till_cli::run(&config)
}
