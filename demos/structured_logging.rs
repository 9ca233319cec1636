//! Structured (JSON) logging example
//!
//! Run with: cargo run --example structured_logging

use rust_field_logger::prelude::*;
use rust_field_logger::error;

fn main() {
    let logger = Logger::builder()
        .level(LogLevel::Info)
        .structured(true)
        .build();

    let request = logger.with_fields(vec![
        ("request_id", FieldValue::from("r-1024")),
        ("latency_ms", FieldValue::from(18.4)),
        ("token", FieldValue::from("eyJhbGciOi")),
    ]);
    request.info("request served");

    // JSON cannot carry NaN, so this record is written as text instead
    request.with_field("ratio", f64::NAN).warn("ratio undefined");

    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db unreachable");
    error!(request.with_error(&err), "query failed after {} retries", 3);

    println!(
        "\nwritten={} fallbacks={}",
        logger.metrics().written_count(),
        logger.metrics().structured_fallback_count()
    );
}
