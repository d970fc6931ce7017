//! # Till CLI Library
//!
//! Wires configuration, storage and a checkout session together.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! └── config.rs       ◄─── Arguments and TILL_* environment
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (stderr; stdout is reserved for the total)      │
//! │  2. Build storefront: --catalog file, or the demo fixture              │
//! │  3. Open a session                                                     │
//! │  4. Scan each SKU (failures are logged and skipped)                    │
//! │  5. Print the two-line total                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;

use std::error::Error;
use std::io::{self, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use till_store::{fixtures, Catalog, Storefront};

pub use config::Config;

/// Runs a checkout, printing the total to stdout.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_output(config, &mut handle)
}

/// [`run`] against any writer.
pub fn run_with_output<W: Write>(config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let storefront = build_storefront(config)?;
    let mut session = storefront.open_session();

    info!(
        session_id = %session.id(),
        items = storefront.repository().len(),
        promotions = ?storefront.promotion_names(),
        "Checkout started"
    );

    for sku in config.scan_list() {
        if let Some(err) = session.scan(sku).error {
            warn!(sku = %sku, error = %err, "Scan failed, skipping");
        }
    }

    session.write_total(out);
    Ok(())
}

/// The catalog file if one was given, otherwise the demo fixture.
fn build_storefront(config: &Config) -> Result<Storefront, Box<dyn Error>> {
    let storefront = match &config.catalog {
        Some(path) => Catalog::load(path)?.into_storefront()?,
        None => fixtures::demo_storefront()?,
    };
    Ok(storefront)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every scan and promotion
/// - `RUST_LOG=till_core=trace` - Include per-rule bundle matches
/// - Default: WARN, INFO for till crates
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,till=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
