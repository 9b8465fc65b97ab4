//! The four agents and the standalone contemplation helpers.
//!
//! Each module owns its corpus table, its keyword rules and a `schema()`
//! describing the commands it backs.

pub mod coder;
pub mod contemplation;
pub mod oracle;
pub mod philosopher;
pub mod zen;

/// Schemas of every plugin, in command-listing order.
pub fn schemas() -> Vec<serde_json::Value> {
    vec![
        coder::schema(),
        oracle::schema(),
        philosopher::schema(),
        zen::schema(),
        contemplation::schema(),
    ]
}
