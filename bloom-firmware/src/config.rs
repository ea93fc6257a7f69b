//! Flower configuration
//!
//! `build.rs` validates flower.toml and embeds it as postcard bytes. If the
//! bytes fail to decode (for example after a layout change without a clean
//! build) the built-in defaults are used.

use bloom_core::config::FlowerConfig;
use defmt::*;

/// Postcard-encoded flower.toml
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/flower.bin"));

/// Load the embedded configuration, falling back to defaults
pub fn load() -> FlowerConfig {
    match FlowerConfig::from_bytes(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded flower config ({} bytes)", EMBEDDED_CONFIG.len());
            config
        }
        Err(e) => {
            error!("Embedded flower config rejected: {:?}", e);
            error!("Using built-in defaults");
            FlowerConfig::default()
        }
    }
}
