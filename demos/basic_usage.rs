//! Basic logger usage example
//!
//! Demonstrates leveled logging, field chaining and redaction through both an
//! explicit logger and the process-wide default.
//!
//! Run with: cargo run --example basic_usage

use rust_field_logger::prelude::*;
use rust_field_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Field Logger - Basic Usage Example ===\n");

    let logger = Logger::new(std::io::stdout(), "", LogLevel::Debug);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)");
    warn!(logger, "Disk usage at {}%", 91);

    println!("\n3. Fields and redaction:");
    logger.set_level(LogLevel::Debug);
    let session = logger
        .with_field("user", "alice")
        .with_field("password", "hunter2");
    info!(session, "login attempt {}", 1);

    println!("\n4. Default logger, configured from LOG_* variables:");
    LoggerConfig::from_env()?.apply(rust_field_logger::default_logger())?;
    rust_field_logger::with_field("component", "demo").info("via the default instance");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
