//! Order Intake Binary
//!
//! Runs one scripted checkout session against the simulated backend and
//! prints the resulting order summary as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-intake -- [config.yaml]
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_INTAKE_CONFIG`: Config file path (default: config.yaml, built-in defaults if absent)
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use order_intake::config::{Config, load_config};
use order_intake::observability::init_logging;
use order_intake::{ContactField, SimulatedContainer};

/// Default config file path.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Attempts the scripted customer makes before giving up.
const MAX_ATTEMPTS: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = read_config()?;
    init_logging(&config.observability.logging).context("failed to initialize logging")?;

    tracing::info!(
        failure_rate = config.simulation.failure_rate,
        seed = ?config.simulation.seed,
        "Starting order intake"
    );

    let container = SimulatedContainer::simulated(&config).context("invalid configuration")?;
    let session = container.new_session();

    // Customization step, one keystroke at a time
    let typed = "Rahul!!";
    for end in 1..=typed.len() {
        session.edit_custom_text(&typed[..end])?;
    }
    session.proceed_to_checkout().await?;

    // Checkout form
    session.edit_contact_field(ContactField::Name, "Rahul Sharma")?;
    session.edit_contact_field(ContactField::Email, "rahul@example.com")?;
    session.edit_contact_field(ContactField::Phone, "9876543210")?;
    session.edit_contact_field(ContactField::Address, "12 MG Road, New Delhi")?;

    // The customer corrects the pincode while the first check is in flight
    let (first, second) = tokio::join!(session.edit_postal_code("400001"), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        session.edit_postal_code("110001").await
    });
    let (first, second) = (first?, second?);
    tracing::info!(?first, ?second, "Pincode checks finished");

    let mut attempts = 0;
    let confirmation = loop {
        attempts += 1;
        match session.submit().await {
            Ok(confirmation) => break confirmation,
            Err(e) if !e.is_local() && attempts < MAX_ATTEMPTS => {
                tracing::warn!(attempts, reason = %e, "Order failed, trying again");
            }
            Err(e) => return Err(e).context("order was not placed"),
        }
    };

    tracing::info!(order_id = %confirmation.order_id, "Order placed");
    println!("{}", serde_json::to_string_pretty(&session.order_summary())?);

    session.reset()?;
    Ok(())
}

/// Load configuration from the first argument, `ORDER_INTAKE_CONFIG`, or
/// `config.yaml`. Only the implicit default may be missing.
fn read_config() -> anyhow::Result<Config> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ORDER_INTAKE_CONFIG").ok());

    match explicit {
        Some(path) => {
            load_config(Some(&path)).with_context(|| format!("failed to load config '{path}'"))
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("failed to load config.yaml")
        }
        None => Ok(Config::default()),
    }
}

/// Load `.env` from the working directory or the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
