//! User Builder - demo entry point
//!
//! Builds a sample user, showing both accepted input and the validation
//! failures raised for a malformed phone number and a repeated address.

use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use user_builder::{Config, UserBuilder};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout only carries the demo output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let clock = config.clock();
    info!(clock = ?clock, "Configuration loaded successfully");

    let mut builder = UserBuilder::with_clock(clock.clone());

    // basic information
    builder
        .first_name("Saruman")?
        .last_name("The White")?
        .birth_date(clock.today())?;

    // phones
    builder
        .phones()
        .add("55555555")?
        .add("66666666")?
        .add("77777777")?;

    if let Err(e) = builder.phones().add("85-555555") {
        warn!("Expected validation failure: {}", e);
        println!("{}", e);
    }

    // addresses
    builder
        .addresses()
        .add("nowhere", 123)?
        .add("vaga lumes", 456)?
        .add("rua das flores", 567)?;

    if let Err(e) = builder.addresses().add("vaga lumes", 456) {
        warn!("Expected validation failure: {}", e);
        println!("{}", e);
    }

    let user = match builder.build() {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to build user: {}", e);
            return Err(e.into());
        }
    };

    println!("Full name: {}", user.full_name());
    let phones: Vec<&str> = user.phones().iter().map(|p| p.as_str()).collect();
    println!("Phones: {:?}", phones);
    if let Some(address) = user.main_address() {
        println!("Main address: {} {}", address.street(), address.number());
    }
    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}
